//! LaTeX conversion error types

use std::path::PathBuf;

use thiserror::Error;
use tintable_core::{CellAddress, Color};

/// Result type for conversion operations
pub type LatexResult<T> = std::result::Result<T, LatexError>;

/// A cell's fill cannot be expressed as a flat RGB color
#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    /// Theme, indexed or automatic color under the strict palette policy
    #[error("cell {cell} uses non-RGB fill color {color} (palette resolution is disabled)")]
    NonRgb {
        /// Cell address
        cell: CellAddress,
        /// The stored color
        color: Color,
    },

    /// Gradient fills have no single color
    #[error("cell {cell} uses a gradient fill, which has no single background color")]
    Gradient {
        /// Cell address
        cell: CellAddress,
    },
}

/// The sheet and its color grid cannot form a table
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    /// The sheet has no rows, so there is no header
    #[error("sheet '{0}' is empty: a header row is required")]
    MissingHeader(String),

    /// Color grid and value grid differ in shape
    #[error("color grid is {colors:?} but the sheet is {values:?} (rows, columns)")]
    ShapeMismatch {
        /// Shape of the value grid
        values: (usize, usize),
        /// Shape of the color grid
        colors: (usize, usize),
    },
}

/// An output file could not be written
#[derive(Debug, Error)]
#[error("failed to write '{}': {source}", .path.display())]
pub struct WriteError {
    /// Destination path
    pub path: PathBuf,
    /// Underlying IO error
    #[source]
    pub source: std::io::Error,
}

/// Any failure between a loaded sheet and the written outputs
#[derive(Debug, Error)]
pub enum LatexError {
    /// Color extraction failed
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Table building failed
    #[error(transparent)]
    Table(#[from] TableError),

    /// Writing an output failed
    #[error(transparent)]
    Write(#[from] WriteError),
}
