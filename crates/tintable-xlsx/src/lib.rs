//! # tintable-xlsx
//!
//! XLSX (Office Open XML) reader for tintable.
//!
//! Reads a single named worksheet into a [`tintable_core::Sheet`], keeping
//! each cell's displayed value (cached results for formulas) and its
//! background fill.

pub mod error;
pub mod reader;

mod dates;
mod styles;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
