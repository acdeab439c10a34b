//! # tintable
//!
//! Convert one sheet of an XLSX workbook into LaTeX that reproduces the
//! sheet's cell background colors.
//!
//! Two texts are produced: `\definecolor` declarations for every distinct
//! fill color, and a `tabular` environment whose data cells are wrapped in
//! `\cellcolor`.
//!
//! ## Example
//!
//! ```rust
//! use tintable::prelude::*;
//!
//! let mut sheet = Sheet::new("Scores", 2, 2);
//! sheet.set_cell(0, 0, Cell::new("Name".into(), FillStyle::None)).unwrap();
//! sheet.set_cell(0, 1, Cell::new("Score".into(), FillStyle::None)).unwrap();
//! sheet.set_cell(1, 0, Cell::new("Alice".into(), FillStyle::None)).unwrap();
//! sheet.set_cell(1, 1, Cell::new(10.0.into(), FillStyle::None)).unwrap();
//!
//! let conversion = Conversion::from_sheet(&sheet, &ColorOptions::default()).unwrap();
//! let options = RenderOptions::default();
//!
//! assert_eq!(
//!     conversion.render_definitions(&options),
//!     "\\definecolor{FFFFFF}{rgb}{1.0,1.0,1.0}\n"
//! );
//! assert!(conversion
//!     .render_table(&options)
//!     .contains("\\cellcolor{FFFFFF}{Alice} & \\cellcolor{FFFFFF}{10} \\\\"));
//! ```
//!
//! Converting a file on disk writes both outputs:
//!
//! ```rust,no_run
//! use tintable::{convert, ConvertOptions};
//!
//! let report = convert("grades.xlsx", &ConvertOptions::new("Sheet1")).unwrap();
//! println!("{} colors", report.colors);
//! ```

mod error;
mod pipeline;
pub mod prelude;

pub use error::{Error, Result};
pub use pipeline::{convert, convert_workbook, Conversion, ConversionReport, ConvertOptions};

// Re-export core types
pub use tintable_core::{
    Cell, CellAddress, CellError, CellValue, Color, FillStyle, HexColor, NumberFormat,
    PatternType, Sheet,
};

// Re-export reader and renderer types
pub use tintable_latex::{
    escape_latex, extract_colors, render_color_definitions, render_table, ColorDefinition,
    ColorError, ColorMap, ColorOptions, ColoredCell, ColoredTable, LatexError, LatexWriter,
    LineEnding, OutputPaths, PalettePolicy, RenderOptions, TableError, WriteError,
};
pub use tintable_xlsx::{XlsxError, XlsxReader};
