//! Output files

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::colors::ColorDefinition;
use crate::error::WriteError;
use crate::options::RenderOptions;
use crate::render::{render_color_definitions, render_table};
use crate::table::ColoredTable;

/// Writes color definitions and tables
pub struct LatexWriter;

impl LatexWriter {
    /// Write the color definitions to a file, replacing its contents
    pub fn write_definitions_file<P: AsRef<Path>>(
        definitions: &[ColorDefinition],
        path: P,
        options: &RenderOptions,
    ) -> Result<(), WriteError> {
        let path = path.as_ref();
        Self::write_to_path(path, |w| Self::write_definitions(definitions, w, options))
    }

    /// Write the color definitions to a writer
    pub fn write_definitions<W: Write>(
        definitions: &[ColorDefinition],
        mut writer: W,
        options: &RenderOptions,
    ) -> std::io::Result<()> {
        writer.write_all(render_color_definitions(definitions, options).as_bytes())?;
        writer.flush()
    }

    /// Write the table to a file, replacing its contents
    pub fn write_table_file<P: AsRef<Path>>(
        table: &ColoredTable,
        path: P,
        options: &RenderOptions,
    ) -> Result<(), WriteError> {
        let path = path.as_ref();
        Self::write_to_path(path, |w| Self::write_table(table, w, options))
    }

    /// Write the table to a writer
    pub fn write_table<W: Write>(
        table: &ColoredTable,
        mut writer: W,
        options: &RenderOptions,
    ) -> std::io::Result<()> {
        writer.write_all(render_table(table, options).as_bytes())?;
        writer.flush()
    }

    fn write_to_path<F>(path: &Path, write: F) -> Result<(), WriteError>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let wrap = |source: std::io::Error| WriteError {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(wrap)?;
        let mut writer = BufWriter::new(file);
        write(&mut writer).map_err(wrap)?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}
