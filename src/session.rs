//! A single drag of a splitter handle, from press to release.

use ratatui::layout::Direction;

use crate::clamp::Bounds;
use crate::document::{Document, ListenerGuard, ListenerKind, OwnerId, VisualLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Dragging,
}

/// Live state of a drag. Owns the document listeners and the visual lock,
/// so dropping the session is the exit path.
#[derive(Debug)]
pub struct DragSession {
    origin: u16,
    container_offset: u16,
    ghost: Option<u16>,
    listeners: Vec<ListenerGuard>,
    _lock: VisualLock,
}

impl DragSession {
    pub fn begin(
        document: &Document,
        owner: OwnerId,
        direction: Direction,
        origin: u16,
        container_offset: u16,
    ) -> Self {
        let listeners = ListenerKind::ALL
            .iter()
            .map(|kind| document.listen(owner, *kind))
            .collect();
        Self {
            origin,
            container_offset,
            ghost: None,
            listeners,
            _lock: document.lock_visuals(direction),
        }
    }

    pub fn origin(&self) -> u16 {
        self.origin
    }

    pub fn container_offset(&self) -> u16 {
        self.container_offset
    }

    /// Last admissible pointer coordinate, `None` until the first one.
    pub fn ghost(&self) -> Option<u16> {
        self.ghost
    }

    /// Ghost position relative to the container edge.
    pub fn ghost_offset(&self) -> Option<u16> {
        self.ghost
            .map(|ghost| ghost.saturating_sub(self.container_offset))
    }

    pub fn listens(&self, kind: ListenerKind) -> bool {
        self.listeners.iter().any(|guard| guard.kind() == kind)
    }

    /// Feed one move coordinate. Returns whether the ghost moved.
    pub fn track(&mut self, candidate: u16, bounds: Bounds) -> bool {
        match bounds.admit(candidate) {
            Some(position) => {
                self.ghost = Some(position);
                true
            }
            None => false,
        }
    }

    /// Re-check the ghost against bounds resolved for a resized container.
    /// A ghost that is no longer admissible is dropped.
    pub fn revalidate(&mut self, bounds: Bounds) {
        self.ghost = self.ghost.and_then(|ghost| bounds.admit(ghost));
    }

    /// Size the first pane should take once the drag ends, given its
    /// measured extent along the axis. `None` when no admissible move
    /// happened. Never negative.
    pub fn commit_size(&self, first_extent: u16) -> Option<u16> {
        let ghost = self.ghost?;
        let size = i32::from(first_extent) + i32::from(ghost) - i32::from(self.origin);
        Some(size.clamp(0, i32::from(u16::MAX)) as u16)
    }
}
