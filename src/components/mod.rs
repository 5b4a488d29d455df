use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod debug_log;
pub mod split_pane;
pub mod status_bar;
pub mod text_pane;

pub use debug_log::{DebugLogComponent, DebugLogHandle, global_debug_log, set_global_debug_log};
pub use split_pane::{PaneSlot, SplitPane};
pub use status_bar::StatusBar;
pub use text_pane::TextPane;

/// UI state handed to components while rendering and handling events.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentContext {
    focused: bool,
    selection_locked: bool,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self {
            focused,
            selection_locked: false,
        }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    /// True while a splitter drag holds the visual lock. Components ignore
    /// pointer input that would scroll or select under the drag.
    pub const fn selection_locked(&self) -> bool {
        self.selection_locked
    }

    pub const fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub const fn with_selection_locked(mut self, locked: bool) -> Self {
        self.selection_locked = locked;
        self
    }
}

pub trait Component {
    fn resize(&mut self, _area: Rect, _ctx: &ComponentContext) {}

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }

    /// True while the component tracks the pointer outside its own area
    /// (a splitter drag); pointer events then go to it wherever they land.
    fn captures_pointer(&self) -> bool {
        false
    }
}

impl<T: Component + ?Sized> Component for Box<T> {
    fn resize(&mut self, area: Rect, ctx: &ComponentContext) {
        (**self).resize(area, ctx)
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        (**self).render(frame, area, ctx)
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        (**self).handle_event(event, ctx)
    }

    fn captures_pointer(&self) -> bool {
        (**self).captures_pointer()
    }
}
