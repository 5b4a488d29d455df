use std::fmt;

use ratatui::layout::Direction;

use crate::error::ConfigError;

/// Receives the committed size of the first pane, once per completed drag.
pub type OnChange = Box<dyn FnMut(u16)>;

/// Configuration of one splitter. Sizes and bounds are in cells.
pub struct SplitterConfig {
    pub direction: Direction,
    /// Initial size of the first pane; changing it resets the committed size.
    pub fallback: u16,
    pub min: Option<u16>,
    /// Upper bound for the live drag position. Defaults to the container
    /// extent minus the ghost thickness.
    ///
    /// Both bounds are compared against absolute terminal coordinates, so a
    /// splitter whose container does not start at column or row 0 (a nested
    /// pane in a second slot) needs an explicit `max` to be draggable.
    pub max: Option<u16>,
    pub on_change: Option<OnChange>,
}

impl SplitterConfig {
    pub fn new(direction: Direction, fallback: u16) -> Self {
        Self {
            direction,
            fallback,
            min: None,
            max: None,
            on_change: None,
        }
    }

    pub fn horizontal(fallback: u16) -> Self {
        Self::new(Direction::Horizontal, fallback)
    }

    pub fn vertical(fallback: u16) -> Self {
        Self::new(Direction::Vertical, fallback)
    }

    pub fn with_min(mut self, min: u16) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: u16) -> Self {
        self.max = Some(max);
        self
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(u16) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min >= max
        {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        Ok(())
    }
}

impl fmt::Debug for SplitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitterConfig")
            .field("direction", &self.direction)
            .field("fallback", &self.fallback)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

pub fn parse_direction(value: &str) -> Result<Direction, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "horizontal" | "h" => Ok(Direction::Horizontal),
        "vertical" | "v" => Ok(Direction::Vertical),
        _ => Err(ConfigError::UnknownDirection(value.to_string())),
    }
}
