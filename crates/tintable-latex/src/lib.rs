//! # tintable-latex
//!
//! Turns a loaded [`Sheet`](tintable_core::Sheet) into LaTeX that keeps the
//! sheet's cell background colors:
//!
//! 1. [`extract_colors`] resolves every cell's fill to a [`HexColor`] and
//!    collects the distinct colors,
//! 2. [`ColoredTable::build`] pairs each data cell's value with its color,
//! 3. [`render_color_definitions`] and [`render_table`] produce the
//!    `\definecolor` lines and the `tabular` environment,
//! 4. [`LatexWriter`] writes both to files.
//!
//! [`HexColor`]: tintable_core::HexColor

mod colors;
mod error;
mod options;
mod render;
mod table;
mod writer;

pub use colors::{extract_colors, ColorDefinition, ColorMap};
pub use error::{ColorError, LatexError, LatexResult, TableError, WriteError};
pub use options::{ColorOptions, LineEnding, OutputPaths, PalettePolicy, RenderOptions};
pub use render::{escape_latex, render_color_definitions, render_table};
pub use table::{ColoredCell, ColoredTable};
pub use writer::LatexWriter;
