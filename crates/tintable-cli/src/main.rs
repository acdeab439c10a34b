//! tintable CLI - spreadsheet sheet to colored LaTeX table

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use std::path::{Path, PathBuf};
use tintable::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "tintable")]
#[command(
    author,
    version,
    about = "Converts an Excel sheet into a LaTeX table with the same background colors"
)]
struct Cli {
    /// Input workbook (.xlsx)
    input: PathBuf,

    /// Name of the sheet to convert
    #[arg(required_unless_present = "list_sheets")]
    sheet: Option<String>,

    /// Where to write the \definecolor lines
    #[arg(long, default_value = OutputPaths::DEFAULT_COLORS)]
    colors_out: PathBuf,

    /// Where to write the tabular environment
    #[arg(long, default_value = OutputPaths::DEFAULT_TABLE)]
    table_out: PathBuf,

    /// Map theme and indexed colors through the default palette instead of failing
    #[arg(long)]
    resolve_palette: bool,

    /// Color for cells without a fill (six hex digits)
    #[arg(long, default_value = "FFFFFF")]
    blank_fill: HexColor,

    /// Escape LaTeX special characters in cell values
    #[arg(long)]
    escape: bool,

    /// Write CRLF line endings
    #[arg(long)]
    crlf: bool,

    /// Print the workbook's sheet names and exit
    #[arg(long)]
    list_sheets: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn convert_options(&self, sheet: &str) -> ConvertOptions {
        ConvertOptions {
            sheet: sheet.to_string(),
            colors: ColorOptions {
                policy: if self.resolve_palette {
                    PalettePolicy::Resolve
                } else {
                    PalettePolicy::Strict
                },
                blank_fill: self.blank_fill,
            },
            render: RenderOptions {
                escape: self.escape,
                line_ending: if self.crlf {
                    LineEnding::CrLf
                } else {
                    LineEnding::Lf
                },
            },
            outputs: OutputPaths {
                colors: self.colors_out.clone(),
                table: self.table_out.clone(),
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_sheets {
        return list_sheets(&cli.input);
    }

    let sheet = cli.sheet.as_deref().context("A sheet name is required")?;
    to_latex(&cli.input, &cli.convert_options(sheet))
}

fn to_latex(input: &Path, options: &ConvertOptions) -> Result<()> {
    let report = convert(input, options).with_context(|| {
        format!(
            "Failed to convert sheet '{}' of '{}'",
            options.sheet,
            input.display()
        )
    })?;

    eprintln!(
        "Wrote {} colors to '{}'",
        report.colors,
        report.outputs.colors.display()
    );
    eprintln!(
        "Wrote {} rows x {} columns to '{}'",
        report.rows,
        report.columns,
        report.outputs.table.display()
    );
    Ok(())
}

fn list_sheets(input: &Path) -> Result<()> {
    let reader =
        XlsxReader::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    for name in reader.sheet_names() {
        println!("{}", name);
    }
    Ok(())
}

/// Plain stderr logger; the level comes from `-v`
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_for(verbose));
    }
}
