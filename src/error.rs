use thiserror::Error;

// Unified error type for rowmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("invalid matrix dimensions {rows}x{cols} (both must be positive)")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("{op}: {reason}")]
    OutOfRange {
        op: &'static str,
        reason: RangeViolation,
    },
}

/// What an `OutOfRange` failure ran past: an index bound or the buffer length.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeViolation {
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    Index {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("expected {expected} elements, got {got}")]
    Length { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, MatError>;
