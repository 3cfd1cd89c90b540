//! Error types shared across the crate.

use thiserror::Error;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to encode image: {0}")]
    Encoding(#[from] image::ImageError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// A parameter rejected before any computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("segments must be even, got {0}")]
    OddSegments(u32),
    #[error("at least 2 colors are required for a gradient, got {0}")]
    TooFewColors(usize),
    #[error("invalid hex color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}
