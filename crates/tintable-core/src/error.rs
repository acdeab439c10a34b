//! Error types for tintable-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tintable-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Used range too large to load as a dense grid
    #[error("Sheet extent {rows} x {cols} exceeds the limit of {limit} cells")]
    SheetTooLarge {
        /// Rows in the used range
        rows: usize,
        /// Columns in the used range
        cols: usize,
        /// [`crate::MAX_CELLS`]
        limit: usize,
    },

    /// Invalid hex color string
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),
}
