//! Workbook to LaTeX conversion

use std::io::{Read, Seek};
use std::path::Path;

use tintable_core::Sheet;
use tintable_latex::{
    extract_colors, render_color_definitions, render_table, ColorDefinition, ColorOptions,
    ColoredTable, LatexWriter, OutputPaths, RenderOptions,
};
use tintable_xlsx::XlsxReader;

use crate::error::Result;

/// Everything one conversion needs
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Name of the sheet to convert (exact match)
    pub sheet: String,
    /// Fill resolution
    pub colors: ColorOptions,
    /// Output formatting
    pub render: RenderOptions,
    /// Output destinations
    pub outputs: OutputPaths,
}

impl ConvertOptions {
    /// Default options for the named sheet
    pub fn new<S: Into<String>>(sheet: S) -> Self {
        Self {
            sheet: sheet.into(),
            colors: ColorOptions::default(),
            render: RenderOptions::default(),
            outputs: OutputPaths::default(),
        }
    }
}

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Converted sheet
    pub sheet: String,
    /// Data rows in the table (header excluded)
    pub rows: usize,
    /// Columns in the table
    pub columns: usize,
    /// Distinct colors declared
    pub colors: usize,
    /// Where the outputs went
    pub outputs: OutputPaths,
}

/// A sheet's color declarations and colored table, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    sheet: String,
    definitions: Vec<ColorDefinition>,
    table: ColoredTable,
}

impl Conversion {
    /// Extract colors and build the table
    pub fn from_sheet(sheet: &Sheet, options: &ColorOptions) -> Result<Self> {
        let colors = extract_colors(sheet, options)?;
        let table = ColoredTable::build(sheet, &colors)?;
        Ok(Self {
            sheet: sheet.name().to_string(),
            definitions: colors.definitions().to_vec(),
            table,
        })
    }

    /// Name of the source sheet
    pub fn sheet_name(&self) -> &str {
        &self.sheet
    }

    /// Distinct colors, header included
    pub fn definitions(&self) -> &[ColorDefinition] {
        &self.definitions
    }

    /// The colored table
    pub fn table(&self) -> &ColoredTable {
        &self.table
    }

    /// `\definecolor` lines
    pub fn render_definitions(&self, options: &RenderOptions) -> String {
        render_color_definitions(&self.definitions, options)
    }

    /// `tabular` environment
    pub fn render_table(&self, options: &RenderOptions) -> String {
        render_table(&self.table, options)
    }

    /// Write the definitions, then the table
    pub fn write(&self, outputs: &OutputPaths, options: &RenderOptions) -> Result<ConversionReport> {
        LatexWriter::write_definitions_file(&self.definitions, &outputs.colors, options)?;
        LatexWriter::write_table_file(&self.table, &outputs.table, options)?;

        Ok(ConversionReport {
            sheet: self.sheet.clone(),
            rows: self.table.row_count(),
            columns: self.table.column_count(),
            colors: self.definitions.len(),
            outputs: outputs.clone(),
        })
    }
}

/// Convert one sheet of the workbook at `input`, writing both outputs
///
/// Nothing is written unless the sheet loads and every cell's color
/// resolves.
pub fn convert<P: AsRef<Path>>(input: P, options: &ConvertOptions) -> Result<ConversionReport> {
    let input = input.as_ref();
    log::info!("reading {}", input.display());
    let mut reader = XlsxReader::open(input)?;
    convert_workbook(&mut reader, options)
}

/// Convert one sheet of an already opened workbook, writing both outputs
pub fn convert_workbook<R: Read + Seek>(
    reader: &mut XlsxReader<R>,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    let sheet = reader.read_sheet(&options.sheet)?;
    let (rows, cols) = sheet.dimensions();
    log::info!("sheet '{}': {} x {}", sheet.name(), rows, cols);

    let conversion = Conversion::from_sheet(&sheet, &options.colors)?;
    let report = conversion.write(&options.outputs, &options.render)?;
    log::info!(
        "wrote {} color(s) to {} and {} row(s) to {}",
        report.colors,
        report.outputs.colors.display(),
        report.rows,
        report.outputs.table.display()
    );
    Ok(report)
}
