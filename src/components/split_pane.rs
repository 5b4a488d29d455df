use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;

use crate::components::{Component, ComponentContext};
use crate::config::SplitterConfig;
use crate::document::Document;
use crate::splitter::{Panes, Splitter};
use crate::ui::{UiFrame, rect_contains};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PaneSlot {
    First,
    Second,
}

/// Two components separated by a draggable splitter. With no second
/// component the first one fills the area and no handle is shown.
///
/// Drag bounds are absolute coordinates; when nesting a `SplitPane` away
/// from the terminal origin, give it a `max` (see [`SplitterConfig::max`]).
pub struct SplitPane<A, B> {
    splitter: Splitter<PaneSlot>,
    first: A,
    second: Option<B>,
    focus: PaneSlot,
    regions: Vec<(PaneSlot, Rect)>,
}

impl<A: Component, B: Component> SplitPane<A, B> {
    pub fn new(config: SplitterConfig, document: Document, first: A, second: B) -> Self {
        Self {
            splitter: Splitter::new(
                config,
                Panes::Pair(PaneSlot::First, PaneSlot::Second),
                document,
            ),
            first,
            second: Some(second),
            focus: PaneSlot::First,
            regions: Vec::new(),
        }
    }

    pub fn single(config: SplitterConfig, document: Document, first: A) -> Self {
        Self {
            splitter: Splitter::new(config, Panes::Single(PaneSlot::First), document),
            first,
            second: None,
            focus: PaneSlot::First,
            regions: Vec::new(),
        }
    }

    pub fn splitter(&self) -> &Splitter<PaneSlot> {
        &self.splitter
    }

    pub fn splitter_mut(&mut self) -> &mut Splitter<PaneSlot> {
        &mut self.splitter
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> Option<&B> {
        self.second.as_ref()
    }

    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    pub fn second_mut(&mut self) -> Option<&mut B> {
        self.second.as_mut()
    }

    /// Swap the second component in or out, degrading to a single pane.
    pub fn set_second(&mut self, second: Option<B>) {
        let panes = if second.is_some() {
            Panes::Pair(PaneSlot::First, PaneSlot::Second)
        } else {
            self.focus = PaneSlot::First;
            Panes::Single(PaneSlot::First)
        };
        self.second = second;
        self.splitter.set_panes(panes);
    }

    /// Take the second component out, leaving a single pane.
    pub fn take_second(&mut self) -> Option<B> {
        let second = self.second.take();
        self.focus = PaneSlot::First;
        self.splitter.set_panes(Panes::Single(PaneSlot::First));
        second
    }

    pub fn focus(&self) -> PaneSlot {
        self.focus
    }

    pub fn set_focus(&mut self, slot: PaneSlot) {
        if slot == PaneSlot::Second && self.second.is_none() {
            return;
        }
        self.focus = slot;
    }

    fn slot_at(&self, column: u16, row: u16) -> Option<PaneSlot> {
        self.regions
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(slot, _)| *slot)
    }

    fn capturing_child(&self) -> Option<PaneSlot> {
        if self.first.captures_pointer() {
            Some(PaneSlot::First)
        } else if self.second.as_ref().is_some_and(Component::captures_pointer) {
            Some(PaneSlot::Second)
        } else {
            None
        }
    }

    fn child_ctx(&self, slot: PaneSlot, ctx: &ComponentContext) -> ComponentContext {
        ctx.with_focus(ctx.focused() && self.focus == slot)
            .with_selection_locked(
                ctx.selection_locked() || self.splitter.document().is_locked(),
            )
    }

    fn forward(&mut self, slot: PaneSlot, event: &Event, ctx: &ComponentContext) -> bool {
        let child_ctx = self.child_ctx(slot, ctx);
        match slot {
            PaneSlot::First => self.first.handle_event(event, &child_ctx),
            PaneSlot::Second => match self.second.as_mut() {
                Some(second) => second.handle_event(event, &child_ctx),
                None => false,
            },
        }
    }
}

impl<A: Component, B: Component> Component for SplitPane<A, B> {
    fn resize(&mut self, area: Rect, _ctx: &ComponentContext) {
        self.regions = self.splitter.regions(area);
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        let first_ctx = self.child_ctx(PaneSlot::First, ctx);
        let second_ctx = self.child_ctx(PaneSlot::Second, ctx);
        let first = &mut self.first;
        let second = &mut self.second;
        self.splitter
            .render(frame, area, |frame, slot, rect| match slot {
                PaneSlot::First => {
                    first.resize(rect, &first_ctx);
                    first.render(frame, rect, &first_ctx);
                }
                PaneSlot::Second => {
                    if let Some(second) = second.as_mut() {
                        second.resize(rect, &second_ctx);
                        second.render(frame, rect, &second_ctx);
                    }
                }
            });
        self.regions = self.splitter.layout(area).regions;
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        match event {
            Event::Mouse(mouse) => {
                if self.splitter.handle_event(event) {
                    return true;
                }
                if let Some(slot) = self.capturing_child() {
                    return self.forward(slot, event, ctx);
                }
                let Some(slot) = self.slot_at(mouse.column, mouse.row) else {
                    return false;
                };
                if matches!(mouse.kind, MouseEventKind::Down(_)) {
                    self.focus = slot;
                }
                self.forward(slot, event, ctx)
            }
            _ => {
                let slot = self.focus;
                self.forward(slot, event, ctx)
            }
        }
    }

    fn captures_pointer(&self) -> bool {
        self.splitter.is_dragging() || self.capturing_child().is_some()
    }
}
