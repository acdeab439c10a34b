//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The displayed value of a cell
//! - [`CellError`] - Spreadsheet error values (`#DIV/0!`, ...)
//! - [`CellAddress`] - A cell's location (e.g., "A1")

mod address;
mod value;

pub use address::CellAddress;
pub use value::{CellError, CellValue};
