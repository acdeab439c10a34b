//! Color representation

use crate::error::{Error, Result};
use std::fmt;

/// A color as stored in the workbook
///
/// Supports RGB, ARGB, theme colors, and indexed colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },

    /// Theme color with optional tint
    ///
    /// Theme indices:
    /// 0 = Background 1 (light)
    /// 1 = Text 1 (dark)
    /// 2 = Background 2
    /// 3 = Text 2
    /// 4-9 = Accent 1-6
    Theme {
        /// Theme color index (0-9)
        index: u8,
        /// Tint value (-1.0 to 1.0, stored as i8 percentage)
        tint: i8,
    },

    /// Indexed color (legacy Excel palette)
    Indexed(u8),
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create a theme color
    pub const fn theme(index: u8, tint: i8) -> Self {
        Color::Theme { index, tint }
    }

    /// Create from a hex string (e.g., "#FF0000", "FF0000" or "FFFF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb { r, g, b })
            }
            8 => {
                let a = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let r = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let g = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let b = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Color::Argb { a, r, g, b })
            }
            _ => None,
        }
    }

    /// The explicit RGB channels, if this color carries them
    ///
    /// The alpha channel of an ARGB color is dropped. Theme, indexed and
    /// automatic colors return `None`.
    pub fn as_hex_color(&self) -> Option<HexColor> {
        match *self {
            Color::Rgb { r, g, b } | Color::Argb { r, g, b, .. } => Some(HexColor::new(r, g, b)),
            _ => None,
        }
    }

    /// Convert to RGB, resolving theme and indexed colors through the
    /// default Office theme and the legacy 56-color palette
    pub fn resolve_rgb(&self) -> HexColor {
        let (r, g, b) = match *self {
            Color::Auto => (0, 0, 0),
            Color::Rgb { r, g, b } => (r, g, b),
            Color::Argb { r, g, b, .. } => (r, g, b),
            Color::Theme { index, tint } => Self::apply_tint(Self::theme_to_rgb(index), tint),
            Color::Indexed(i) => Self::indexed_to_rgb(i),
        };
        HexColor::new(r, g, b)
    }

    /// Check if color is automatic/default
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }

    /// Get RGB for indexed color
    fn indexed_to_rgb(index: u8) -> (u8, u8, u8) {
        // Standard Excel color palette (first 56 colors)
        const PALETTE: [(u8, u8, u8); 56] = [
            (0, 0, 0),       // 0: Black
            (255, 255, 255), // 1: White
            (255, 0, 0),     // 2: Red
            (0, 255, 0),     // 3: Bright Green
            (0, 0, 255),     // 4: Blue
            (255, 255, 0),   // 5: Yellow
            (255, 0, 255),   // 6: Pink
            (0, 255, 255),   // 7: Turquoise
            (0, 0, 0),       // 8: Black
            (255, 255, 255), // 9: White
            (255, 0, 0),     // 10: Red
            (0, 255, 0),     // 11: Bright Green
            (0, 0, 255),     // 12: Blue
            (255, 255, 0),   // 13: Yellow
            (255, 0, 255),   // 14: Pink
            (0, 255, 255),   // 15: Turquoise
            (128, 0, 0),     // 16: Dark Red
            (0, 128, 0),     // 17: Green
            (0, 0, 128),     // 18: Dark Blue
            (128, 128, 0),   // 19: Dark Yellow
            (128, 0, 128),   // 20: Violet
            (0, 128, 128),   // 21: Teal
            (192, 192, 192), // 22: 25% Gray
            (128, 128, 128), // 23: 50% Gray
            (153, 153, 255), // 24: Periwinkle
            (153, 51, 102),  // 25: Plum
            (255, 255, 204), // 26: Ivory
            (204, 255, 255), // 27: Light Turquoise
            (102, 0, 102),   // 28: Dark Purple
            (255, 128, 128), // 29: Coral
            (0, 102, 204),   // 30: Ocean Blue
            (204, 204, 255), // 31: Ice Blue
            (0, 0, 128),     // 32: Dark Blue
            (255, 0, 255),   // 33: Pink
            (255, 255, 0),   // 34: Yellow
            (0, 255, 255),   // 35: Turquoise
            (128, 0, 128),   // 36: Violet
            (128, 0, 0),     // 37: Dark Red
            (0, 128, 128),   // 38: Teal
            (0, 0, 255),     // 39: Blue
            (0, 204, 255),   // 40: Sky Blue
            (204, 255, 255), // 41: Light Turquoise
            (204, 255, 204), // 42: Light Green
            (255, 255, 153), // 43: Light Yellow
            (153, 204, 255), // 44: Pale Blue
            (255, 153, 204), // 45: Rose
            (204, 153, 255), // 46: Lavender
            (255, 204, 153), // 47: Tan
            (51, 102, 255),  // 48: Light Blue
            (51, 204, 204),  // 49: Aqua
            (153, 204, 0),   // 50: Lime
            (255, 204, 0),   // 51: Gold
            (255, 153, 0),   // 52: Light Orange
            (255, 102, 0),   // 53: Orange
            (102, 102, 153), // 54: Blue-Gray
            (150, 150, 150), // 55: 40% Gray
        ];

        // 64 is the system foreground, 65 the system background
        match index {
            64 => (0, 0, 0),
            65 => (255, 255, 255),
            i => PALETTE.get(i as usize).copied().unwrap_or((0, 0, 0)),
        }
    }

    /// Get RGB for theme color (using default Office theme)
    fn theme_to_rgb(index: u8) -> (u8, u8, u8) {
        match index {
            0 => (255, 255, 255), // Background 1 (white)
            1 => (0, 0, 0),       // Text 1 (black)
            2 => (238, 236, 225), // Background 2
            3 => (31, 73, 125),   // Text 2
            4 => (79, 129, 189),  // Accent 1
            5 => (192, 80, 77),   // Accent 2
            6 => (155, 187, 89),  // Accent 3
            7 => (128, 100, 162), // Accent 4
            8 => (75, 172, 198),  // Accent 5
            9 => (247, 150, 70),  // Accent 6
            _ => (0, 0, 0),
        }
    }

    /// Apply tint to a color
    fn apply_tint(color: (u8, u8, u8), tint: i8) -> (u8, u8, u8) {
        let tint_float = tint as f64 / 100.0;

        let apply = |c: u8| -> u8 {
            let c = c as f64;
            let result = if tint_float < 0.0 {
                c * (1.0 + tint_float)
            } else {
                c + (255.0 - c) * tint_float
            };
            result.clamp(0.0, 255.0) as u8
        };

        (apply(color.0), apply(color.1), apply(color.2))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
            Color::Theme { index, tint } => write!(f, "theme({}, {}%)", index, tint),
            Color::Indexed(i) => write!(f, "indexed({})", i),
        }
    }
}

/// A flat 24-bit color, the unit every cell fill resolves to
///
/// Displays as six uppercase hex digits (`FFFFFF`), which is also the name
/// the color is declared under in LaTeX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl HexColor {
    /// White, the fill used for cells without one
    pub const WHITE: HexColor = HexColor::new(255, 255, 255);

    /// Black
    pub const BLACK: HexColor = HexColor::new(0, 0, 0);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit RGB or 8-digit ARGB hex string
    ///
    /// An 8-digit string has its leading alpha byte dropped.
    pub fn parse(hex: &str) -> Result<Self> {
        Color::from_hex(hex)
            .and_then(|c| c.as_hex_color())
            .ok_or_else(|| Error::InvalidColor(hex.to_string()))
    }

    /// Six uppercase hex digits
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to `[0, 1]` and rounded to two decimals
    pub fn normalized(&self) -> (f64, f64, f64) {
        fn channel(c: u8) -> f64 {
            (c as f64 * 100.0 / 255.0).round() / 100.0
        }
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
