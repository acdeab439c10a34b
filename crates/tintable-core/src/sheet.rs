//! Dense in-memory sheet

use crate::cell::{CellAddress, CellValue};
use crate::error::{Error, Result};
use crate::style::FillStyle;
use crate::MAX_CELLS;

/// A single cell: its displayed value and its background fill
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// Displayed value (cached result for formulas)
    pub value: CellValue,
    /// Background fill
    pub fill: FillStyle,
}

impl Cell {
    /// Create a new cell
    pub fn new(value: CellValue, fill: FillStyle) -> Self {
        Self { value, fill }
    }
}

/// One named sheet, loaded completely into a `rows × columns` grid
///
/// The extent is the used range anchored at A1: every position up to the
/// last row and column that holds a cell is present, missing positions are
/// empty unfilled cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Sheet {
    /// Create an empty sheet of the given size
    pub fn new<S: Into<String>>(name: S, rows: usize, cols: usize) -> Self {
        Self {
            name: name.into(),
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    /// Build a sheet from sparse cells, sizing it to the largest address
    ///
    /// Later cells at the same address replace earlier ones. Fails when the
    /// extent holds more than [`MAX_CELLS`] positions.
    pub fn from_cells<S, I>(name: S, cells: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (CellAddress, Cell)>,
    {
        let cells: Vec<(CellAddress, Cell)> = cells.into_iter().collect();
        let rows = cells
            .iter()
            .map(|(addr, _)| addr.row as usize + 1)
            .max()
            .unwrap_or(0);
        let cols = cells
            .iter()
            .map(|(addr, _)| addr.col as usize + 1)
            .max()
            .unwrap_or(0);

        match rows.checked_mul(cols) {
            Some(n) if n <= MAX_CELLS => {}
            _ => {
                return Err(Error::SheetTooLarge {
                    rows,
                    cols,
                    limit: MAX_CELLS,
                })
            }
        }

        let mut sheet = Self::new(name, rows, cols);
        for (addr, cell) in cells {
            let idx = addr.row as usize * cols + addr.col as usize;
            sheet.cells[idx] = cell;
        }
        Ok(sheet)
    }

    /// Sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Check if the sheet has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Replace the cell at a position
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        if row >= self.rows {
            return Err(Error::RowOutOfBounds(
                row as u32,
                self.rows.saturating_sub(1) as u32,
            ));
        }
        if col >= self.cols {
            return Err(Error::ColumnOutOfBounds(
                col as u16,
                self.cols.saturating_sub(1) as u16,
            ));
        }
        self.cells[row * self.cols + col] = cell;
        Ok(())
    }

    /// Get the cell at a position
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get the value at a position (`Empty` outside the grid)
    pub fn value_at(&self, row: usize, col: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.cell(row, col).map_or(EMPTY, |c| &c.value)
    }

    /// Get the fill at a position (`None` outside the grid)
    pub fn fill_at(&self, row: usize, col: usize) -> FillStyle {
        self.cell(row, col).map(|c| c.fill).unwrap_or_default()
    }

    /// Iterate over rows in order, header first
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.cols.max(1))
    }

    /// The first row, which supplies column names
    pub fn header(&self) -> Option<&[Cell]> {
        self.rows().next()
    }

    /// All rows after the header
    pub fn data_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows().skip(1)
    }
}
