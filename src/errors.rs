use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplitError>;

/// Error type that captures every way a split run can fail.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Receipt unavailable at `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed {format} receipt: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Semantic problems detected before or during allocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("item #{index} ({name}) has no attendees")]
    NoAttendees { index: usize, name: String },
    #[error("item #{index} ({name}) has a negative price: {price}")]
    NegativePrice {
        index: usize,
        name: String,
        price: f64,
    },
    #[error("item #{index} ({name}) has a non-finite price")]
    NonFinitePrice { index: usize, name: String },
    #[error("{field} must be a finite, non-negative amount (got {value})")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("item #{index} ({name}) costs more than can be represented")]
    NonFiniteCost { index: usize, name: String },
    #[error("{step} overflowed; amounts are too large to split")]
    NonFiniteTotal { step: &'static str },
    #[error("receipt subtotal is zero; shares cannot be distributed")]
    ZeroSubtotal,
}
