//! Drag-resizable two-pane splitter for terminal user interfaces.
//!
//! A [`Splitter`](splitter::Splitter) lays out a first and second pane with a
//! handle between them. Pressing the handle (mouse or touch) starts a drag
//! session that previews the new position with a ghost bar; the first pane is
//! resized once, on release, and the committed size is handed to the
//! `on_change` callback so the embedder can persist it.

pub mod clamp;
pub mod components;
pub mod config;
pub mod constants;
pub mod document;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod ghost;
pub mod pointer;
pub mod session;
pub mod splitter;
pub mod theme;
pub mod tracing_sub;
pub mod ui;

pub use config::SplitterConfig;
pub use document::{CursorIcon, Document};
pub use error::ConfigError;
pub use pointer::{PointerInput, TouchEvent, TouchPhase, TouchPoint};
pub use session::SessionState;
pub use splitter::{Panes, SplitLayout, Splitter};
