//! Error types for Podium

use thiserror::Error;

/// Main error type for contest model construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PodiumError {
    /// Error in the contest model as a whole
    #[error("Domain model error: {0}")]
    DomainModel(String),

    /// An id that does not belong to the contest being built
    #[error("Unknown {kind} reference: #{index}")]
    UnknownReference { kind: &'static str, index: usize },

    /// Two entities that must be distinct share the same identity
    #[error("Duplicate {kind}: {name}")]
    Duplicate { kind: &'static str, name: String },
}

/// Result type alias for Podium model operations
pub type Result<T> = std::result::Result<T, PodiumError>;
