//! Document-scope resources shared by every splitter mounted in one UI.
//!
//! A drag keeps tracking the pointer after it leaves the handle, so the
//! session subscribes to move/release events at document scope and forces a
//! resize cursor with text selection disabled. Both resources are handed out
//! as guards that give the resource back on `Drop`; a session that ends for
//! any reason (release, teardown of the splitter, a new session replacing it)
//! therefore cannot leak a listener or leave the cursor locked.
//!
//! Everything runs on the UI thread, so the shared state lives behind
//! `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use ratatui::layout::Direction;

/// Identifies the owner (one splitter instance) of document resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OwnerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListenerKind {
    MouseMove,
    MouseUp,
    TouchMove,
    TouchEnd,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 4] = [
        ListenerKind::MouseMove,
        ListenerKind::MouseUp,
        ListenerKind::TouchMove,
        ListenerKind::TouchEnd,
    ];

    /// Move listeners never block the host's default scrolling.
    pub fn is_passive(self) -> bool {
        matches!(self, ListenerKind::MouseMove | ListenerKind::TouchMove)
    }
}

/// Cursor the host should show over the whole viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    ColResize,
    RowResize,
}

impl CursorIcon {
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Horizontal => CursorIcon::ColResize,
            Direction::Vertical => CursorIcon::RowResize,
        }
    }

    /// Pointer shape name understood by the OSC 22 escape sequence.
    pub fn shape_name(self) -> &'static str {
        match self {
            CursorIcon::Default => "default",
            CursorIcon::ColResize => "col-resize",
            CursorIcon::RowResize => "row-resize",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Listener {
    owner: OwnerId,
    kind: ListenerKind,
    passive: bool,
}

#[derive(Debug, Default)]
struct DocumentState {
    next_owner: u64,
    next_token: u64,
    listeners: BTreeMap<u64, Listener>,
    locks: Vec<(u64, CursorIcon)>,
}

impl DocumentState {
    fn token(&mut self) -> u64 {
        self.next_token = self.next_token.wrapping_add(1);
        self.next_token
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: Rc<RefCell<DocumentState>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_owner(&self) -> OwnerId {
        let mut state = self.inner.borrow_mut();
        state.next_owner = state.next_owner.wrapping_add(1);
        OwnerId(state.next_owner)
    }

    pub fn listen(&self, owner: OwnerId, kind: ListenerKind) -> ListenerGuard {
        let mut state = self.inner.borrow_mut();
        let token = state.token();
        state.listeners.insert(
            token,
            Listener {
                owner,
                kind,
                passive: kind.is_passive(),
            },
        );
        ListenerGuard {
            document: self.clone(),
            token,
            kind,
        }
    }

    pub fn lock_visuals(&self, direction: Direction) -> VisualLock {
        let mut state = self.inner.borrow_mut();
        let token = state.token();
        state.locks.push((token, CursorIcon::for_direction(direction)));
        VisualLock {
            document: self.clone(),
            token,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn listener_count_for(&self, owner: OwnerId) -> usize {
        self.inner
            .borrow()
            .listeners
            .values()
            .filter(|listener| listener.owner == owner)
            .count()
    }

    pub fn is_listening(&self, owner: OwnerId, kind: ListenerKind) -> bool {
        self.inner
            .borrow()
            .listeners
            .values()
            .any(|listener| listener.owner == owner && listener.kind == kind)
    }

    pub fn has_passive(&self, owner: OwnerId, kind: ListenerKind) -> bool {
        self.inner
            .borrow()
            .listeners
            .values()
            .any(|listener| listener.owner == owner && listener.kind == kind && listener.passive)
    }

    /// Cursor requested by the most recent visual lock still held.
    pub fn cursor(&self) -> CursorIcon {
        self.inner
            .borrow()
            .locks
            .last()
            .map(|(_, icon)| *icon)
            .unwrap_or_default()
    }

    pub fn selection_enabled(&self) -> bool {
        self.inner.borrow().locks.is_empty()
    }

    pub fn is_locked(&self) -> bool {
        !self.selection_enabled()
    }
}

/// Registration of one document-level listener; deregisters on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    document: Document,
    token: u64,
    kind: ListenerKind,
}

impl ListenerGuard {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.document.inner.borrow_mut().listeners.remove(&self.token);
    }
}

/// Forced resize cursor plus disabled text selection; reverted on drop.
#[derive(Debug)]
pub struct VisualLock {
    document: Document,
    token: u64,
}

impl Drop for VisualLock {
    fn drop(&mut self) {
        let mut state = self.document.inner.borrow_mut();
        state.locks.retain(|(token, _)| *token != self.token);
    }
}
