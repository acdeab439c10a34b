//! # tintable-core
//!
//! Core data structures for tintable.
//!
//! This crate provides the fundamental types shared by the reader and the
//! LaTeX renderer:
//! - [`CellValue`] - The displayed value of a cell (text, number, date, ...)
//! - [`CellAddress`] - Cell addressing in A1 notation
//! - [`Color`], [`HexColor`] and [`FillStyle`] - Background fill colors
//! - [`Sheet`] - A dense, fully loaded grid of cells
//!
//! ## Example
//!
//! ```rust
//! use tintable_core::{Cell, CellValue, Color, FillStyle, Sheet};
//!
//! let white = FillStyle::solid(Color::rgb(255, 255, 255));
//! let mut sheet = Sheet::new("Scores", 2, 2);
//! sheet.set_cell(0, 0, Cell::new(CellValue::text("Name"), white)).unwrap();
//! sheet.set_cell(1, 1, Cell::new(CellValue::Number(10.0), white)).unwrap();
//!
//! assert_eq!(sheet.dimensions(), (2, 2));
//! assert_eq!(sheet.value_at(1, 1).to_string(), "10");
//! ```

pub mod cell;
pub mod error;
pub mod sheet;
pub mod style;

pub use cell::{CellAddress, CellError, CellValue};
pub use error::{Error, Result};
pub use sheet::{Cell, Sheet};
pub use style::{Color, FillStyle, HexColor, NumberFormat, PatternType};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Largest `rows × columns` grid a [`Sheet`] is built from sparse cells
pub const MAX_CELLS: usize = 1 << 23;
