//! Error types for the relationship engine

use thiserror::Error;

/// Errors raised when constructing or configuring the engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// A weight was negative or non-finite
    #[error("invalid weight for '{attribute}': {value}")]
    InvalidWeight {
        /// The offending attribute name
        attribute: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The acceptance threshold was outside [0, 100]
    #[error("invalid threshold {0}: must be within 0-100")]
    InvalidThreshold(f64),

    /// Configuration could not be parsed or serialized
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while scoring one artifact pair.
///
/// These are caught at the per-candidate boundary during discovery: a
/// failing pair is logged, recorded as a diagnostic, and treated as "no
/// connection" — it never aborts the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// The weighted combination produced a non-finite value
    #[error("similarity computation produced a non-finite value")]
    NonFinite,
}
