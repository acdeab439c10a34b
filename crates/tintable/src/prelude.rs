//! Prelude module - common imports for tintable users
//!
//! ```rust
//! use tintable::prelude::*;
//! ```

pub use crate::{
    // Pipeline
    convert,
    Cell,
    CellAddress,
    // Cell types
    CellValue,
    Color,
    ColorOptions,
    ColoredTable,
    Conversion,
    ConversionReport,
    ConvertOptions,
    // Error types
    Error,
    FillStyle,
    HexColor,
    LatexWriter,
    LineEnding,
    OutputPaths,
    PalettePolicy,
    RenderOptions,
    Result,
    Sheet,
    // I/O types
    XlsxReader,
};
