//! Cell styling types
//!
//! Only the parts of a cell style that survive into LaTeX output are kept:
//! - [`FillStyle`] - Background fill
//! - [`Color`] / [`HexColor`] - Stored and resolved colors
//! - [`NumberFormat`] - Used to recognize dates

mod color;
mod fill;
mod number_format;

pub use color::{Color, HexColor};
pub use fill::{FillStyle, PatternType};
pub use number_format::NumberFormat;
