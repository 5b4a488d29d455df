//! Pointer input unification.
//!
//! Terminals deliver mouse reports through crossterm, while touch-capable
//! hosts (web terminals, PTY bridges) hand us touch lists. Both are folded
//! into [`PointerInput`] so the drag session only ever sees one coordinate
//! along the active axis. Dispatch happens on the variant tag; nothing
//! assumes a touch event looks like a mouse event.

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Direction;

/// Lifecycle of a touch sequence as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One active contact point, in viewport cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub column: u16,
    pub row: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// Contacts still on the surface. Empty for `End` once the last finger
    /// lifted.
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touches: Vec<TouchPoint>) -> Self {
        Self { phase, touches }
    }

    pub fn single(phase: TouchPhase, column: u16, row: u16) -> Self {
        Self::new(phase, vec![TouchPoint { column, row }])
    }

    pub fn first(&self) -> Option<TouchPoint> {
        self.touches.first().copied()
    }
}

/// What a pointer event means to a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerInput {
    Mouse(MouseEvent),
    Touch(TouchEvent),
    Unknown,
}

impl PointerInput {
    pub fn from_event(event: &Event) -> Self {
        match event {
            Event::Mouse(mouse) => PointerInput::Mouse(*mouse),
            _ => PointerInput::Unknown,
        }
    }

    pub fn phase(&self) -> PointerPhase {
        match self {
            PointerInput::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => PointerPhase::Press,
                MouseEventKind::Drag(_) | MouseEventKind::Moved => PointerPhase::Move,
                MouseEventKind::Up(_) => PointerPhase::Release,
                _ => PointerPhase::Other,
            },
            PointerInput::Touch(touch) => match touch.phase {
                TouchPhase::Start => PointerPhase::Press,
                TouchPhase::Move => PointerPhase::Move,
                // A cancelled touch still has to run the session exit path.
                TouchPhase::End | TouchPhase::Cancel => PointerPhase::Release,
            },
            PointerInput::Unknown => PointerPhase::Other,
        }
    }

    /// Viewport position of the pointer, used for hit testing.
    pub fn position(&self) -> Option<(u16, u16)> {
        match self {
            PointerInput::Mouse(mouse) => Some((mouse.column, mouse.row)),
            PointerInput::Touch(touch) => touch.first().map(|point| (point.column, point.row)),
            PointerInput::Unknown => None,
        }
    }

    /// Coordinate along `direction`; `0` when the event carries none.
    pub fn coordinate(&self, direction: Direction) -> u16 {
        self.position()
            .map(|(column, row)| match direction {
                Direction::Horizontal => column,
                Direction::Vertical => row,
            })
            .unwrap_or(0)
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, PointerInput::Touch(_))
    }
}

impl From<MouseEvent> for PointerInput {
    fn from(mouse: MouseEvent) -> Self {
        PointerInput::Mouse(mouse)
    }
}

impl From<TouchEvent> for PointerInput {
    fn from(touch: TouchEvent) -> Self {
        PointerInput::Touch(touch)
    }
}
