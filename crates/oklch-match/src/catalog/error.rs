//! Error types for catalog construction

use thiserror::Error;

/// Error returned when catalog data violates a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two palettes share a name
    #[error("duplicate palette name: {0}")]
    DuplicatePalette(String),
    /// A shade key outside 1..=12
    #[error("shade {shade} is out of range (expected 1..=12)")]
    ShadeOutOfRange {
        /// The offending key
        shade: u8,
    },
    /// A base color family without a neutral partner
    #[error("color family {0} has no gray pair")]
    MissingGrayPair(String),
    /// A gray pair pointing at something that is not a neutral palette
    #[error("gray pair for {family} names {neutral}, which is not a neutral palette")]
    UnknownNeutral {
        /// The color family
        family: String,
        /// The missing or non-neutral partner
        neutral: String,
    },
}
