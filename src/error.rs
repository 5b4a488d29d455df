use thiserror::Error;

/// Rejected splitter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum size {min} must be smaller than maximum size {max}")]
    InvertedBounds { min: u16, max: u16 },
    #[error("unknown split direction `{0}` (expected `horizontal` or `vertical`)")]
    UnknownDirection(String),
}
