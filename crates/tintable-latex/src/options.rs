//! Conversion options

use std::path::PathBuf;

use tintable_core::HexColor;

/// How fills that are not plain RGB are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PalettePolicy {
    /// Theme, indexed and automatic colors are an error
    #[default]
    Strict,
    /// Map them through the default Office theme and legacy palette
    Resolve,
}

/// Options for resolving cell fills to colors
#[derive(Debug, Clone)]
pub struct ColorOptions {
    /// Treatment of theme/indexed/automatic colors
    pub policy: PalettePolicy,
    /// Color given to cells without any fill (default: white)
    pub blank_fill: HexColor,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            policy: PalettePolicy::Strict,
            blank_fill: HexColor::WHITE,
        }
    }
}

/// Line terminator for both outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style (LF)
    #[default]
    Lf,
    /// Windows-style (CRLF)
    CrLf,
}

impl LineEnding {
    /// The terminator text
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Options for rendering LaTeX
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Escape LaTeX special characters in header and cell values.
    /// Off by default: values pass through as raw markup.
    pub escape: bool,
    /// Line terminator
    pub line_ending: LineEnding,
}

/// Destinations of the two outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `\definecolor` lines
    pub colors: PathBuf,
    /// `tabular` environment
    pub table: PathBuf,
}

impl OutputPaths {
    /// Default color-definition file name
    pub const DEFAULT_COLORS: &'static str = "color_definitions.txt";
    /// Default table file name
    pub const DEFAULT_TABLE: &'static str = "latex_table.txt";

    /// Both outputs inside `dir`, under their default names
    pub fn in_dir<P: Into<PathBuf>>(dir: P) -> Self {
        let dir = dir.into();
        Self {
            colors: dir.join(Self::DEFAULT_COLORS),
            table: dir.join(Self::DEFAULT_TABLE),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            colors: PathBuf::from(Self::DEFAULT_COLORS),
            table: PathBuf::from(Self::DEFAULT_TABLE),
        }
    }
}
