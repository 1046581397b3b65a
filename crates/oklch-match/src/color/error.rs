//! Error types for color parsing

use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Wrong number of digits after stripping an optional leading `#`
    #[error("invalid hex color length {0} (expected 6 digits)")]
    InvalidLength(usize),
    /// A character outside `0-9a-fA-F`
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Error returned when an `oklch(L C H)` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOklchError {
    /// Not wrapped in `oklch(` … `)`
    #[error("expected oklch(L C H)")]
    MissingFunction,
    /// Wrong number of components inside the parentheses
    #[error("expected 3 components, found {0}")]
    ComponentCount(usize),
    /// A component is not a non-negative decimal number
    #[error("invalid component: {0}")]
    InvalidComponent(String),
}
