use std::cell::RefCell;
use std::error::Error;
use std::mem;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use indoc::indoc;
use ratatui::layout::{Direction, Rect};
use tracing::{Level, info};

use term_split::components::{
    Component, ComponentContext, DebugLogComponent, DebugLogHandle, SplitPane, StatusBar,
    TextPane, set_global_debug_log,
};
use term_split::config::parse_direction;
use term_split::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use term_split::drivers::{InputDriver, OutputDriver};
use term_split::event_loop::{ControlFlow, EventLoop};
use term_split::ui::UiFrame;
use term_split::{Document, SessionState, SplitterConfig, tracing_sub};

const SCHEMA_TEXT: &str = indoc! {"
    tables
      trades
        timestamp
        symbol
        price
        amount
      quotes
        timestamp
        bid
        ask
"};

const EDITOR_TEXT: &str = indoc! {"
    SELECT symbol, avg(price)
    FROM trades
    WHERE timestamp > now() - 1h
    SAMPLE BY 1m;

    -- drag the handles to resize the panes
    -- q or Ctrl+Q quits
"};

#[derive(Debug, Parser)]
#[command(name = "term-split", about = "Resizable split-pane demo")]
struct Args {
    /// Axis of the schema/editor split.
    #[arg(long, value_parser = parse_direction, default_value = "horizontal")]
    direction: Direction,
    /// Initial size of the schema pane.
    #[arg(long, default_value_t = 30)]
    schema_basis: u16,
    /// Initial height of the schema/editor region above the log.
    #[arg(long, default_value_t = 14)]
    editor_basis: u16,
    /// Lower bound for the live drag position of both handles.
    #[arg(long)]
    min: Option<u16>,
    /// Upper bound for the live drag position of both handles.
    #[arg(long)]
    max: Option<u16>,
    /// Hide the schema pane when the terminal is narrower than this.
    #[arg(long, default_value_t = 60)]
    narrow_width: u16,
    /// Log verbosity shown in the log pane.
    #[arg(long, default_value_t = Level::DEBUG)]
    log_level: Level,
}

/// Stand-in for the external settings store: keeps committed sizes and
/// hands them back as fallbacks.
#[derive(Debug, Clone, Copy)]
struct Settings {
    schema_basis: u16,
    editor_basis: u16,
}

type Workspace = SplitPane<TextPane, TextPane>;

struct App {
    document: Document,
    root: SplitPane<Workspace, DebugLogComponent>,
    stashed_schema: Option<TextPane>,
    settings: Rc<RefCell<Settings>>,
    status: StatusBar,
    narrow_width: u16,
}

fn bounded(mut config: SplitterConfig, args: &Args) -> SplitterConfig {
    config.min = args.min;
    config.max = args.max;
    config
}

impl App {
    fn new(args: &Args, log: DebugLogHandle) -> Result<Self, Box<dyn Error>> {
        let document = Document::new();
        let settings = Rc::new(RefCell::new(Settings {
            schema_basis: args.schema_basis,
            editor_basis: args.editor_basis,
        }));

        let store = settings.clone();
        let workspace_config = bounded(
            SplitterConfig::new(args.direction, args.schema_basis),
            args,
        )
        .on_change(move |value| {
            store.borrow_mut().schema_basis = value;
            info!(value, "schema size saved");
        });
        workspace_config.validate()?;

        let store = settings.clone();
        let root_config = bounded(SplitterConfig::vertical(args.editor_basis), args).on_change(
            move |value| {
                store.borrow_mut().editor_basis = value;
                info!(value, "editor size saved");
            },
        );
        root_config.validate()?;

        let schema = TextPane::new("schema").with_lines(SCHEMA_TEXT.lines());
        let editor = TextPane::new("editor").with_lines(EDITOR_TEXT.lines());
        let workspace = SplitPane::new(workspace_config, document.clone(), schema, editor);
        let mut results = DebugLogComponent::with_handle(log);
        results.set_title("results");
        let root = SplitPane::new(root_config, document.clone(), workspace, results);

        Ok(Self {
            document,
            root,
            stashed_schema: None,
            settings,
            status: StatusBar::new(),
            narrow_width: args.narrow_width,
        })
    }

    /// Re-supply stored sizes as fallbacks, the way a settings-backed
    /// layout would on every render.
    fn apply_settings(&mut self) {
        let settings = *self.settings.borrow();
        self.root
            .splitter_mut()
            .set_fallback(settings.editor_basis);
        self.root
            .first_mut()
            .splitter_mut()
            .set_fallback(settings.schema_basis);
    }

    /// Hide the schema pane on narrow terminals; the editor then fills the
    /// workspace on its own.
    fn apply_responsive(&mut self, width: u16) {
        let workspace = self.root.first_mut();
        let narrow = width < self.narrow_width;
        if narrow && self.stashed_schema.is_none() {
            if let Some(editor) = workspace.take_second() {
                self.stashed_schema = Some(mem::replace(workspace.first_mut(), editor));
                info!(width, "schema pane hidden");
            }
        } else if !narrow && let Some(schema) = self.stashed_schema.take() {
            let editor = mem::replace(workspace.first_mut(), schema);
            workspace.set_second(Some(editor));
            info!(width, "schema pane restored");
        }
    }

    fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = frame.area();
        if area.width == 0 || area.height < 2 {
            return;
        }
        let body = Rect {
            height: area.height - 1,
            ..area
        };
        let status = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };
        let ctx = ComponentContext::new(true);
        self.root.render(frame, body, &ctx);

        let workspace = self.root.first().splitter();
        let dragging = workspace.state() == SessionState::Dragging
            || self.root.splitter().state() == SessionState::Dragging;
        let schema = if self.stashed_schema.is_some() {
            "hidden".to_string()
        } else {
            workspace.basis().to_string()
        };
        self.status.set_left(format!(
            " schema {schema} | editor {} | {}",
            self.root.splitter().basis(),
            if dragging { "resizing" } else { "idle" }
        ));
        self.status.set_right("q quit ");
        self.status.render(frame, status, &ctx);
    }

    fn handle_event(&mut self, event: &Event) -> ControlFlow {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && (key.code == KeyCode::Char('q')
                || (key.code == KeyCode::Char('c') || key.code == KeyCode::Char('Q'))
                    && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return ControlFlow::Quit;
        }
        self.root.handle_event(event, &ComponentContext::new(true));
        ControlFlow::Continue
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let (_, log) = DebugLogComponent::new_default();
    set_global_debug_log(log.clone());
    tracing_sub::init(args.log_level);

    let mut app = App::new(&args, log)?;
    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(true)?;

    let mut event_loop = EventLoop::new(input, Duration::from_millis(16));
    let result = event_loop.run(|_, event| {
        match event {
            Some(event) => Ok(app.handle_event(&event)),
            None => {
                app.apply_settings();
                let (width, _) = crossterm::terminal::size()?;
                app.apply_responsive(width);
                output.set_pointer_shape(app.document.cursor())?;
                output.draw(|mut frame| app.render(&mut frame))?;
                Ok(ControlFlow::Continue)
            }
        }
    });

    output.exit()?;
    result.map_err(Into::into)
}
