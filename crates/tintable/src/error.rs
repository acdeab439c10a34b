//! Top-level error type

use thiserror::Error;
use tintable_latex::{ColorError, LatexError, TableError, WriteError};
use tintable_xlsx::XlsxError;

/// Result type for conversions
pub type Result<T> = std::result::Result<T, Error>;

/// Anything that can stop a conversion
#[derive(Debug, Error)]
pub enum Error {
    /// The workbook could not be read, or the sheet is missing
    #[error(transparent)]
    Xlsx(#[from] XlsxError),

    /// Colors, table or output files
    #[error(transparent)]
    Latex(#[from] LatexError),
}

impl From<ColorError> for Error {
    fn from(err: ColorError) -> Self {
        Error::Latex(err.into())
    }
}

impl From<TableError> for Error {
    fn from(err: TableError) -> Self {
        Error::Latex(err.into())
    }
}

impl From<WriteError> for Error {
    fn from(err: WriteError) -> Self {
        Error::Latex(err.into())
    }
}
