//! Color extraction

use ahash::AHashSet;
use tintable_core::{CellAddress, Color, FillStyle, HexColor, Sheet};

use crate::error::ColorError;
use crate::options::{ColorOptions, PalettePolicy};

/// One distinct color, declared once in the preamble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorDefinition {
    /// The color; its hex digits double as the LaTeX color name
    pub color: HexColor,
}

impl ColorDefinition {
    /// LaTeX color name
    pub fn name(&self) -> String {
        self.color.hex()
    }

    /// `(r, g, b)` in `[0, 1]`, two decimals
    pub fn rgb(&self) -> (f64, f64, f64) {
        self.color.normalized()
    }
}

/// The colors of a sheet: distinct definitions plus a per-cell grid
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    definitions: Vec<ColorDefinition>,
    grid: Vec<Vec<HexColor>>,
}

impl ColorMap {
    /// Distinct colors in first-seen, row-major order
    pub fn definitions(&self) -> &[ColorDefinition] {
        &self.definitions
    }

    /// Per-cell colors, same shape as the sheet
    pub fn grid(&self) -> &[Vec<HexColor>] {
        &self.grid
    }

    /// Color of one cell
    pub fn color_at(&self, row: usize, col: usize) -> Option<HexColor> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// `(rows, columns)` of the grid
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.len(), self.grid.first().map_or(0, Vec::len))
    }
}

/// Resolve every cell's fill, header row included
///
/// Walks the sheet row-major; the first cell whose fill cannot be resolved
/// aborts the walk.
pub fn extract_colors(sheet: &Sheet, options: &ColorOptions) -> Result<ColorMap, ColorError> {
    let mut seen: AHashSet<HexColor> = AHashSet::new();
    let mut definitions = Vec::new();
    let mut grid = Vec::with_capacity(sheet.row_count());

    for (row, cells) in sheet.rows().enumerate() {
        let mut colors = Vec::with_capacity(cells.len());
        for (col, cell) in cells.iter().enumerate() {
            let addr = CellAddress::new(row as u32, col as u16);
            let color = resolve_fill(cell.fill, options, addr)?;
            if seen.insert(color) {
                definitions.push(ColorDefinition { color });
            }
            colors.push(color);
        }
        grid.push(colors);
    }

    log::debug!(
        "extracted {} distinct color(s) from {} cell(s)",
        definitions.len(),
        sheet.row_count() * sheet.column_count()
    );

    Ok(ColorMap { definitions, grid })
}

fn resolve_fill(
    fill: FillStyle,
    options: &ColorOptions,
    cell: CellAddress,
) -> Result<HexColor, ColorError> {
    match fill {
        FillStyle::None => Ok(options.blank_fill),
        FillStyle::Solid { color } => resolve_color(color, options.policy, cell),
        FillStyle::Pattern {
            foreground,
            background,
            ..
        } => match (foreground, background.as_hex_color()) {
            // An automatic foreground shows the pattern's background
            (Color::Auto, Some(bg)) => Ok(bg),
            (fg, _) => resolve_color(fg, options.policy, cell),
        },
        FillStyle::Gradient => Err(ColorError::Gradient { cell }),
    }
}

fn resolve_color(
    color: Color,
    policy: PalettePolicy,
    cell: CellAddress,
) -> Result<HexColor, ColorError> {
    if let Some(hex) = color.as_hex_color() {
        return Ok(hex);
    }
    match policy {
        PalettePolicy::Strict => Err(ColorError::NonRgb { cell, color }),
        PalettePolicy::Resolve => Ok(color.resolve_rgb()),
    }
}
