//! Shared crate-wide constants.

/// Thickness (in cells) of the floating ghost indicator drawn while a drag
/// is in progress.
///
/// It doubles as the minimum visual threshold for the clamping policy: the
/// live drag position must stay strictly more than this many cells away
/// from both container edges, so the indicator always has room to render.
pub const GHOST_THICKNESS: u16 = 1;

/// Thickness (in cells) of the draggable handle laid out between the two
/// panes.
pub const HANDLE_THICKNESS: u16 = 1;

/// Number of grip glyphs drawn in the middle of the handle.
pub const GRIP_LENGTH: u16 = 3;
