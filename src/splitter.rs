//! Two-pane splitter controller.
//!
//! The splitter lays out an ordered pair of panes along one axis with a
//! handle between them. Dragging the handle only moves a ghost indicator;
//! the first pane's size (its basis) changes once, when the drag ends, and
//! the new value is reported through the configured `on_change` callback.

use crossterm::event::Event;
use ratatui::layout::{Direction, Rect};
use tracing::{debug, trace};

use crate::clamp::Bounds;
use crate::config::SplitterConfig;
use crate::constants::HANDLE_THICKNESS;
use crate::document::{Document, ListenerKind, OwnerId};
use crate::ghost::{GhostPreview, SplitHandle};
use crate::pointer::{PointerInput, PointerPhase};
use crate::session::{DragSession, SessionState};
use crate::ui::{UiFrame, rect_contains};

/// Panes managed by a splitter, first pane first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panes<Id: Copy + Eq> {
    /// Nothing to split; the pane takes the whole area.
    Single(Id),
    Pair(Id, Id),
}

impl<Id: Copy + Eq> Panes<Id> {
    pub fn first(&self) -> Id {
        match self {
            Panes::Single(id) | Panes::Pair(id, _) => *id,
        }
    }

    pub fn second(&self) -> Option<Id> {
        match self {
            Panes::Single(_) => None,
            Panes::Pair(_, id) => Some(*id),
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Panes::Single(_))
    }
}

/// Geometry of a splitter for one container area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLayout<Id: Copy + Eq> {
    pub regions: Vec<(Id, Rect)>,
    pub handle: Option<Rect>,
}

impl<Id: Copy + Eq> SplitLayout<Id> {
    pub fn region(&self, id: Id) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(region_id, _)| *region_id == id)
            .map(|(_, rect)| *rect)
    }
}

pub(crate) fn axis_extent(direction: Direction, area: Rect) -> u16 {
    match direction {
        Direction::Horizontal => area.width,
        Direction::Vertical => area.height,
    }
}

fn axis_origin(direction: Direction, area: Rect) -> u16 {
    match direction {
        Direction::Horizontal => area.x,
        Direction::Vertical => area.y,
    }
}

fn slice(direction: Direction, area: Rect, start: u16, len: u16) -> Rect {
    match direction {
        Direction::Horizontal => Rect {
            x: area.x.saturating_add(start),
            y: area.y,
            width: len,
            height: area.height,
        },
        Direction::Vertical => Rect {
            x: area.x,
            y: area.y.saturating_add(start),
            width: area.width,
            height: len,
        },
    }
}

#[derive(Debug)]
pub struct Splitter<Id: Copy + Eq> {
    owner: OwnerId,
    document: Document,
    config: SplitterConfig,
    panes: Panes<Id>,
    basis: u16,
    session: Option<DragSession>,
    container: Option<Rect>,
    first_rect: Option<Rect>,
    hover: Option<(u16, u16)>,
}

impl<Id: Copy + Eq> Splitter<Id> {
    pub fn new(config: SplitterConfig, panes: Panes<Id>, document: Document) -> Self {
        let owner = document.allocate_owner();
        Self {
            owner,
            basis: config.fallback,
            document,
            config,
            panes,
            session: None,
            container: None,
            first_rect: None,
            hover: None,
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    pub fn panes(&self) -> Panes<Id> {
        self.panes
    }

    pub fn direction(&self) -> Direction {
        self.config.direction
    }

    /// Committed size of the first pane.
    pub fn basis(&self) -> u16 {
        self.basis
    }

    pub fn state(&self) -> SessionState {
        if self.session.is_some() {
            SessionState::Dragging
        } else {
            SessionState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Last admissible drag position in viewport cells, if any.
    pub fn ghost_position(&self) -> Option<u16> {
        self.session.as_ref().and_then(DragSession::ghost)
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Container area from the most recent layout pass.
    pub fn container(&self) -> Option<Rect> {
        self.container
    }

    /// Resets the committed size when `fallback` differs from the current one.
    pub fn set_fallback(&mut self, fallback: u16) {
        if fallback == self.config.fallback {
            return;
        }
        debug!(owner = ?self.owner, fallback, "splitter fallback changed");
        self.config.fallback = fallback;
        self.apply_basis(fallback);
    }

    pub fn set_config(&mut self, config: SplitterConfig) {
        let fallback_changed = config.fallback != self.config.fallback;
        if config.direction != self.config.direction && self.session.take().is_some() {
            debug!(owner = ?self.owner, "splitter drag discarded by direction change");
        }
        self.config = config;
        if fallback_changed {
            self.apply_basis(self.config.fallback);
        }
    }

    pub fn set_panes(&mut self, panes: Panes<Id>) {
        if panes.is_single() && self.session.take().is_some() {
            debug!(owner = ?self.owner, "splitter drag discarded, single pane left");
        }
        self.panes = panes;
        if let Some(container) = self.container {
            self.sync_area(container);
        }
    }

    pub fn layout(&self, area: Rect) -> SplitLayout<Id> {
        let (first, second) = match self.panes {
            Panes::Single(id) => {
                return SplitLayout {
                    regions: vec![(id, area)],
                    handle: None,
                };
            }
            Panes::Pair(first, second) => (first, second),
        };
        let direction = self.config.direction;
        let extent = axis_extent(direction, area);
        let handle = HANDLE_THICKNESS.min(extent);
        let available = extent.saturating_sub(handle);
        let first_len = self.basis.min(available);
        let second_len = available.saturating_sub(first_len);
        SplitLayout {
            regions: vec![
                (first, slice(direction, area, 0, first_len)),
                (
                    second,
                    slice(
                        direction,
                        area,
                        first_len.saturating_add(handle),
                        second_len,
                    ),
                ),
            ],
            handle: Some(slice(direction, area, first_len, handle)),
        }
    }

    /// Record the container the splitter is laid out in. Pointer handling
    /// measures against the last synced area. A running drag re-checks its
    /// ghost against the bounds of the new area.
    pub fn sync_area(&mut self, area: Rect) {
        let layout = self.layout(area);
        self.first_rect = layout.region(self.panes.first());
        self.container = Some(area);
        if let Some(session) = self.session.as_mut() {
            let direction = self.config.direction;
            let bounds = Bounds::resolve(
                self.config.min,
                self.config.max,
                axis_extent(direction, area),
            );
            session.revalidate(bounds);
        }
    }

    pub fn handle_rect(&self) -> Option<Rect> {
        self.layout(self.container?).handle
    }

    pub fn handle_hovered(&self) -> bool {
        match (self.hover, self.handle_rect()) {
            (Some((column, row)), Some(rect)) => rect_contains(rect, column, row),
            _ => false,
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> bool {
        match PointerInput::from_event(event) {
            PointerInput::Unknown => false,
            input => self.handle_input(&input),
        }
    }

    /// Feed a pointer event. Returns `true` when the splitter consumed it.
    pub fn handle_input(&mut self, input: &PointerInput) -> bool {
        if let Some(position) = input.position() {
            self.hover = Some(position);
        }
        match input.phase() {
            PointerPhase::Press => self.press(input),
            PointerPhase::Move => self.drag(input),
            PointerPhase::Release => self.release(input),
            PointerPhase::Other => false,
        }
    }

    fn press(&mut self, input: &PointerInput) -> bool {
        if self.panes.is_single() {
            return false;
        }
        let Some(container) = self.container else {
            return false;
        };
        let Some((column, row)) = input.position() else {
            return false;
        };
        let Some(handle) = self.layout(container).handle else {
            return false;
        };
        if !rect_contains(handle, column, row) {
            return false;
        }
        let direction = self.config.direction;
        if self.session.take().is_some() {
            debug!(owner = ?self.owner, "splitter drag replaced by a new press");
        }
        let origin = input.coordinate(direction);
        let offset = axis_origin(direction, container);
        debug!(
            owner = ?self.owner,
            origin,
            offset,
            touch = input.is_touch(),
            "splitter drag started"
        );
        self.session = Some(DragSession::begin(
            &self.document,
            self.owner,
            direction,
            origin,
            offset,
        ));
        true
    }

    fn drag(&mut self, input: &PointerInput) -> bool {
        let kind = match input {
            PointerInput::Mouse(_) => ListenerKind::MouseMove,
            PointerInput::Touch(_) => ListenerKind::TouchMove,
            PointerInput::Unknown => return false,
        };
        let direction = self.config.direction;
        let container = self.container;
        let (min, max) = (self.config.min, self.config.max);
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.listens(kind) {
            return false;
        }
        let Some(container) = container else {
            return true;
        };
        let candidate = input.coordinate(direction);
        let bounds = Bounds::resolve(min, max, axis_extent(direction, container));
        let moved = session.track(candidate, bounds);
        trace!(candidate, moved, min = bounds.min, max = bounds.max, "splitter move");
        true
    }

    fn release(&mut self, input: &PointerInput) -> bool {
        let kind = match input {
            PointerInput::Mouse(_) => ListenerKind::MouseUp,
            PointerInput::Touch(_) => ListenerKind::TouchEnd,
            PointerInput::Unknown => return false,
        };
        if !self.session.as_ref().is_some_and(|s| s.listens(kind)) {
            return false;
        }
        let Some(session) = self.session.take() else {
            return false;
        };
        let measured = self
            .first_rect
            .map(|rect| axis_extent(self.config.direction, rect));
        let size = measured.and_then(|extent| session.commit_size(extent));
        drop(session);
        match size {
            Some(size) => self.commit(size),
            None => debug!(owner = ?self.owner, "splitter drag ended without a move"),
        }
        true
    }

    fn commit(&mut self, size: u16) {
        debug!(owner = ?self.owner, from = self.basis, to = size, "splitter commit");
        self.apply_basis(size);
        if let Some(callback) = self.config.on_change.as_mut() {
            callback(size);
        }
    }

    fn apply_basis(&mut self, basis: u16) {
        self.basis = basis;
        if let Some(container) = self.container {
            self.sync_area(container);
        }
    }

    /// Pane regions for `area`, recording it as the current container.
    pub fn regions(&mut self, area: Rect) -> Vec<(Id, Rect)> {
        self.sync_area(area);
        self.layout(area).regions
    }

    /// Render panes through `paint`, then the handle and, while dragging,
    /// the ghost indicator above them.
    pub fn render<F>(&mut self, frame: &mut UiFrame<'_>, area: Rect, mut paint: F)
    where
        F: FnMut(&mut UiFrame<'_>, Id, Rect),
    {
        self.sync_area(area);
        let layout = self.layout(area);
        for (id, rect) in &layout.regions {
            paint(frame, *id, *rect);
        }
        self.render_chrome(frame, area, &layout);
    }

    fn render_chrome(&self, frame: &mut UiFrame<'_>, area: Rect, layout: &SplitLayout<Id>) {
        if let Some(rect) = layout.handle {
            let handle = SplitHandle::new(self.config.direction)
                .hovered(self.handle_hovered())
                .pressed(self.is_dragging());
            frame.render_widget(handle, rect);
        }
        if let Some(offset) = self.session.as_ref().and_then(DragSession::ghost_offset) {
            frame.render_widget(GhostPreview::new(self.config.direction, offset), area);
        }
    }
}

impl<Id: Copy + Eq> Drop for Splitter<Id> {
    fn drop(&mut self) {
        if self.session.take().is_some() {
            debug!(owner = ?self.owner, "splitter drag discarded on teardown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::{TouchEvent, TouchPhase};
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::buffer::Buffer;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> PointerInput {
        PointerInput::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn down(column: u16, row: u16) -> PointerInput {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    fn drag(column: u16, row: u16) -> PointerInput {
        mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
    }

    fn up(column: u16, row: u16) -> PointerInput {
        mouse(MouseEventKind::Up(MouseButton::Left), column, row)
    }

    fn recording(config: SplitterConfig) -> (SplitterConfig, Rc<RefCell<Vec<u16>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (config.on_change(move |v| sink.borrow_mut().push(v)), calls)
    }

    fn horizontal(fallback: u16) -> (Splitter<u8>, Rc<RefCell<Vec<u16>>>) {
        let (config, calls) = recording(SplitterConfig::horizontal(fallback));
        let splitter = Splitter::new(config, Panes::Pair(1, 2), Document::new());
        (splitter, calls)
    }

    #[test]
    fn layout_places_handle_after_basis() {
        let (splitter, _) = horizontal(6);
        let layout = splitter.layout(Rect::new(0, 0, 20, 4));
        assert_eq!(layout.region(1), Some(Rect::new(0, 0, 6, 4)));
        assert_eq!(layout.handle, Some(Rect::new(6, 0, 1, 4)));
        assert_eq!(layout.region(2), Some(Rect::new(7, 0, 13, 4)));
    }

    #[test]
    fn layout_shrinks_first_pane_to_fit() {
        let (config, _) = recording(SplitterConfig::vertical(50));
        let splitter = Splitter::new(config, Panes::Pair(1u8, 2u8), Document::new());
        let layout = splitter.layout(Rect::new(0, 2, 10, 8));
        assert_eq!(layout.region(1), Some(Rect::new(0, 2, 10, 7)));
        assert_eq!(layout.handle, Some(Rect::new(0, 9, 10, 1)));
        assert_eq!(layout.region(2), Some(Rect::new(0, 10, 10, 0)));
    }

    #[test]
    fn single_pane_takes_everything() {
        let document = Document::new();
        let mut splitter = Splitter::new(
            SplitterConfig::horizontal(5),
            Panes::Single(1u8),
            document.clone(),
        );
        let area = Rect::new(0, 0, 10, 3);
        assert_eq!(splitter.regions(area), vec![(1, area)]);
        assert!(!splitter.handle_input(&down(5, 1)));
        assert!(!splitter.handle_input(&down(0, 0)));
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn press_outside_handle_is_ignored() {
        let (mut splitter, _) = horizontal(6);
        splitter.sync_area(Rect::new(0, 0, 20, 4));
        assert!(!splitter.handle_input(&down(2, 1)));
        assert_eq!(splitter.state(), SessionState::Idle);
    }

    #[test]
    fn press_without_container_is_ignored() {
        let (mut splitter, _) = horizontal(6);
        assert!(!splitter.handle_input(&down(6, 1)));
        assert_eq!(splitter.document().listener_count(), 0);
    }

    #[test]
    fn drag_commits_delta_once() {
        let (mut splitter, calls) = horizontal(6);
        splitter.sync_area(Rect::new(0, 0, 20, 4));
        assert!(splitter.handle_input(&down(6, 1)));
        assert_eq!(splitter.state(), SessionState::Dragging);
        assert!(splitter.handle_input(&drag(9, 1)));
        assert_eq!(splitter.ghost_position(), Some(9));
        assert_eq!(splitter.basis(), 6);
        assert!(splitter.handle_input(&up(9, 1)));
        assert_eq!(splitter.basis(), 9);
        assert_eq!(*calls.borrow(), vec![9]);
        assert_eq!(splitter.state(), SessionState::Idle);
        assert_eq!(splitter.ghost_position(), None);
    }

    #[test]
    fn release_without_move_keeps_basis() {
        let (mut splitter, calls) = horizontal(6);
        splitter.sync_area(Rect::new(0, 0, 20, 4));
        splitter.handle_input(&down(6, 1));
        assert!(splitter.handle_input(&up(6, 1)));
        assert_eq!(splitter.basis(), 6);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn release_while_idle_is_not_consumed() {
        let (mut splitter, _) = horizontal(6);
        splitter.sync_area(Rect::new(0, 0, 20, 4));
        assert!(!splitter.handle_input(&up(6, 1)));
        assert!(!splitter.handle_input(&drag(8, 1)));
    }

    #[test]
    fn move_outside_bounds_sticks_to_last_valid() {
        let (mut splitter, calls) = horizontal(6);
        splitter.sync_area(Rect::new(0, 0, 20, 4));
        splitter.handle_input(&down(6, 1));
        splitter.handle_input(&drag(12, 1));
        // max resolves to 19; 19 and beyond are rejected
        splitter.handle_input(&drag(19, 1));
        splitter.handle_input(&drag(0, 1));
        assert_eq!(splitter.ghost_position(), Some(12));
        splitter.handle_input(&up(25, 1));
        assert_eq!(*calls.borrow(), vec![12]);
    }

    #[test]
    fn shrinking_container_mid_drag_drops_stale_ghost() {
        let (mut splitter, calls) = horizontal(30);
        splitter.sync_area(Rect::new(0, 0, 80, 4));
        assert!(splitter.handle_input(&down(30, 1)));
        splitter.handle_input(&drag(70, 1));
        assert_eq!(splitter.ghost_position(), Some(70));
        splitter.sync_area(Rect::new(0, 0, 40, 4));
        assert_eq!(splitter.ghost_position(), None);
        splitter.handle_input(&up(70, 1));
        assert!(calls.borrow().is_empty());
        assert_eq!(splitter.basis(), 30);
    }

    #[test]
    fn shrinking_container_keeps_ghost_still_in_bounds() {
        let (mut splitter, calls) = horizontal(30);
        splitter.sync_area(Rect::new(0, 0, 80, 4));
        splitter.handle_input(&down(30, 1));
        splitter.handle_input(&drag(35, 1));
        splitter.sync_area(Rect::new(0, 0, 40, 4));
        assert_eq!(splitter.ghost_position(), Some(35));
        splitter.handle_input(&up(35, 1));
        assert_eq!(*calls.borrow(), vec![35]);
    }

    #[test]
    fn offset_container_needs_explicit_max() {
        let (mut splitter, calls) = horizontal(10);
        splitter.sync_area(Rect::new(40, 0, 40, 4));
        splitter.handle_input(&down(50, 1));
        splitter.handle_input(&drag(60, 1));
        // default max resolves to 39, left of the whole container
        assert_eq!(splitter.ghost_position(), None);
        splitter.handle_input(&up(60, 1));
        assert!(calls.borrow().is_empty());

        let (config, calls) = recording(SplitterConfig::horizontal(10).with_max(79));
        splitter.set_config(config);
        splitter.sync_area(Rect::new(40, 0, 40, 4));
        assert!(splitter.handle_input(&down(50, 1)));
        splitter.handle_input(&drag(60, 1));
        assert_eq!(splitter.ghost_position(), Some(60));
        splitter.handle_input(&up(60, 1));
        assert_eq!(*calls.borrow(), vec![20]);
    }

    #[test]
    fn touch_session_ends_on_cancel() {
        let (mut splitter, calls) = horizontal(6);
        splitter.sync_area(Rect::new(0, 0, 20, 4));
        splitter.handle_input(&TouchEvent::single(TouchPhase::Start, 6, 2).into());
        splitter.handle_input(&TouchEvent::single(TouchPhase::Move, 4, 2).into());
        splitter.handle_input(&TouchEvent::new(TouchPhase::Cancel, Vec::new()).into());
        assert_eq!(*calls.borrow(), vec![4]);
        assert_eq!(splitter.document().listener_count(), 0);
    }

    #[test]
    fn fallback_change_resets_basis() {
        let (mut splitter, _) = horizontal(6);
        splitter.sync_area(Rect::new(0, 0, 20, 4));
        splitter.handle_input(&down(6, 1));
        splitter.handle_input(&drag(10, 1));
        splitter.handle_input(&up(10, 1));
        assert_eq!(splitter.basis(), 10);
        splitter.set_fallback(6);
        assert_eq!(splitter.basis(), 10);
        splitter.set_fallback(3);
        assert_eq!(splitter.basis(), 3);
        assert_eq!(splitter.handle_rect(), Some(Rect::new(3, 0, 1, 4)));
    }

    #[test]
    fn new_press_replaces_running_session() {
        let (mut splitter, calls) = horizontal(6);
        splitter.sync_area(Rect::new(0, 0, 20, 4));
        splitter.handle_input(&down(6, 1));
        splitter.handle_input(&drag(10, 1));
        splitter.handle_input(&down(6, 2));
        assert_eq!(splitter.ghost_position(), None);
        assert_eq!(splitter.document().listener_count(), 4);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn render_draws_ghost_only_while_dragging() {
        let (mut splitter, _) = horizontal(6);
        let area = Rect::new(0, 0, 20, 3);
        let mut buffer = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buffer);
            splitter.render(&mut frame, area, |_, _, _| {});
        }
        assert_eq!(buffer.cell((6, 1)).unwrap().symbol(), "•");
        splitter.handle_input(&down(6, 0));
        splitter.handle_input(&drag(11, 0));
        let mut buffer = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buffer);
            splitter.render(&mut frame, area, |_, _, _| {});
        }
        assert_eq!(buffer.cell((11, 0)).unwrap().bg, crate::theme::ghost());
        // panes keep their committed geometry while the ghost moves
        assert_eq!(splitter.handle_rect(), Some(Rect::new(6, 0, 1, 3)));
    }

    #[test]
    fn render_paints_each_region() {
        let (mut splitter, _) = horizontal(4);
        let area = Rect::new(0, 0, 10, 2);
        let mut buffer = Buffer::empty(area);
        let mut painted = Vec::new();
        {
            let mut frame = UiFrame::from_parts(area, &mut buffer);
            splitter.render(&mut frame, area, |_, id, rect| painted.push((id, rect)));
        }
        assert_eq!(
            painted,
            vec![(1, Rect::new(0, 0, 4, 2)), (2, Rect::new(5, 0, 5, 2))]
        );
    }
}
