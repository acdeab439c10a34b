//! Header plus colored data cells

use std::fmt;

use tintable_core::{CellValue, HexColor, Sheet};

use crate::colors::ColorMap;
use crate::error::TableError;

/// A data cell's value paired with its background color
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredCell {
    /// Value as loaded
    pub value: CellValue,
    /// Resolved background color
    pub color: HexColor,
}

impl ColoredCell {
    /// Create a new colored cell
    pub fn new(value: CellValue, color: HexColor) -> Self {
        Self { value, color }
    }
}

impl fmt::Display for ColoredCell {
    /// Debug-friendly `value_HEX` form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.value, self.color)
    }
}

/// The table to render: column names from the first row, then one
/// [`ColoredCell`] per data cell
///
/// Header cells keep their text only; their colors are still declared by
/// the color definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredTable {
    header: Vec<String>,
    rows: Vec<Vec<ColoredCell>>,
}

impl ColoredTable {
    /// Pair every data cell of `sheet` with its color from `colors`
    pub fn build(sheet: &Sheet, colors: &ColorMap) -> Result<Self, TableError> {
        let header = sheet
            .header()
            .ok_or_else(|| TableError::MissingHeader(sheet.name().to_string()))?;

        if colors.dimensions() != sheet.dimensions() {
            return Err(TableError::ShapeMismatch {
                values: sheet.dimensions(),
                colors: colors.dimensions(),
            });
        }

        let header: Vec<String> = header.iter().map(|c| c.value.to_string()).collect();

        let rows = sheet
            .data_rows()
            .zip(colors.grid().iter().skip(1))
            .map(|(cells, row_colors)| {
                cells
                    .iter()
                    .zip(row_colors)
                    .map(|(cell, color)| ColoredCell::new(cell.value.clone(), *color))
                    .collect()
            })
            .collect();

        Ok(Self { header, rows })
    }

    /// Column names
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows
    pub fn rows(&self) -> &[Vec<ColoredCell>] {
        &self.rows
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Colors referenced by data cells, without repeats
    pub fn colors_used(&self) -> Vec<HexColor> {
        let mut used: Vec<HexColor> = Vec::new();
        for cell in self.rows.iter().flatten() {
            if !used.contains(&cell.color) {
                used.push(cell.color);
            }
        }
        used
    }
}
