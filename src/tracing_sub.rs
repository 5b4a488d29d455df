use std::io::{self, Write};

use tracing::Level;

use crate::components::debug_log::{DebugLogWriter, global_debug_log};

/// Routes subscriber output into the on-screen debug log once one is
/// registered; stderr would tear through the alternate screen otherwise.
pub enum LogWriter {
    DebugLog(DebugLogWriter),
    Stderr(io::Stderr),
}

impl LogWriter {
    fn current() -> Self {
        match global_debug_log() {
            Some(handle) => LogWriter::DebugLog(handle.writer()),
            None => LogWriter::Stderr(io::stderr()),
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::DebugLog(w) => w.write(buf),
            LogWriter::Stderr(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::DebugLog(w) => w.flush(),
            LogWriter::Stderr(s) => s.flush(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SubscriberMakeWriter;

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter::current()
    }
}

/// Install a compact fmt subscriber at `level`. Later calls are no-ops.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(SubscriberMakeWriter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();
}

pub fn init_default() {
    init(Level::DEBUG);
}
