//! End-to-end tests for tintable-xlsx.
//!
//! Each test builds the workbook it needs in memory (raw SpreadsheetML in a
//! zip archive), opens it with `XlsxReader` and asserts on the loaded sheet.

mod common;
mod reading;

pub use common::*;
