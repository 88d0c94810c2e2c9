//! Error types for universe construction and mutation

use thiserror::Error;

/// Errors produced by [`Universe`](super::Universe) operations.
///
/// Every failing call leaves the universe untouched; there is no partial
/// state to recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniverseError {
    /// Construction with a zero or over-limit dimension.
    #[error("invalid dimensions {width}x{height}: each side must be in 1..={limit}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        limit: usize,
    },

    /// A coordinate-taking mutation targeted a cell outside the grid.
    ///
    /// Never wrapped toroidally: wrapping is a step-rule internal, while a
    /// toggle must hit exactly the cell the caller named.
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfRangeCoordinate {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// Row-based construction received rows of differing lengths.
    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
}
