//! Error types for tang-filter.
//!
//! Only constructors fail. Predicate evaluation itself always returns a sign.

/// Input that cannot be turned into a filtered scalar or matrix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    /// NaN or infinite input has no exact value.
    #[error("non-finite input {value} has no exact value")]
    NonFinite { value: f64 },
    /// Interval bounds out of order, or NaN.
    #[error("invalid interval bounds [{lo}, {hi}]")]
    InvalidBounds { lo: f64, hi: f64 },
    /// Wrong number of rows for an N×N determinant.
    #[error("expected {expected} rows, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    /// A row with the wrong number of entries.
    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}
