//! Fill/background style types

use super::Color;

/// Fill style for cell background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillStyle {
    /// No fill (transparent)
    #[default]
    None,

    /// Solid color fill
    Solid { color: Color },

    /// Pattern fill
    Pattern {
        pattern: PatternType,
        foreground: Color,
        background: Color,
    },

    /// Gradient fill; the stops are not retained
    Gradient,
}

impl FillStyle {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType, foreground: Color, background: Color) -> Self {
        FillStyle::Pattern {
            pattern,
            foreground,
            background,
        }
    }

    /// Build a fill from the parts of a `<patternFill>` element
    ///
    /// `none` and the `gray125` placeholder Excel writes at fill index 1
    /// both mean "no fill".
    pub fn from_pattern_parts(pattern: Option<PatternType>, fg: Color, bg: Color) -> Self {
        match pattern.unwrap_or(PatternType::None) {
            PatternType::None | PatternType::Gray125 => FillStyle::None,
            PatternType::Solid => FillStyle::Solid { color: fg },
            p => FillStyle::Pattern {
                pattern: p,
                foreground: fg,
                background: bg,
            },
        }
    }

    /// Check if this is a "no fill"
    pub fn is_none(&self) -> bool {
        matches!(self, FillStyle::None)
    }
}

/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    /// No pattern
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    /// Horizontal stripe
    DarkHorizontal,
    /// Vertical stripe
    DarkVertical,
    /// Diagonal stripe (down)
    DarkDown,
    /// Diagonal stripe (up)
    DarkUp,
    /// Grid
    DarkGrid,
    /// Trellis
    DarkTrellis,
    /// Thin horizontal stripe
    LightHorizontal,
    /// Thin vertical stripe
    LightVertical,
    /// Thin diagonal stripe (down)
    LightDown,
    /// Thin diagonal stripe (up)
    LightUp,
    /// Thin grid
    LightGrid,
    /// Thin trellis
    LightTrellis,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}

impl PatternType {
    /// Parse the `patternType` attribute value used in styles.xml
    pub fn from_xlsx(s: &str) -> Option<Self> {
        Some(match s {
            "none" => PatternType::None,
            "solid" => PatternType::Solid,
            "mediumGray" => PatternType::MediumGray,
            "darkGray" => PatternType::DarkGray,
            "lightGray" => PatternType::LightGray,
            "darkHorizontal" => PatternType::DarkHorizontal,
            "darkVertical" => PatternType::DarkVertical,
            "darkDown" => PatternType::DarkDown,
            "darkUp" => PatternType::DarkUp,
            "darkGrid" => PatternType::DarkGrid,
            "darkTrellis" => PatternType::DarkTrellis,
            "lightHorizontal" => PatternType::LightHorizontal,
            "lightVertical" => PatternType::LightVertical,
            "lightDown" => PatternType::LightDown,
            "lightUp" => PatternType::LightUp,
            "lightGrid" => PatternType::LightGrid,
            "lightTrellis" => PatternType::LightTrellis,
            "gray125" => PatternType::Gray125,
            "gray0625" => PatternType::Gray0625,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_parts() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(
            FillStyle::from_pattern_parts(Some(PatternType::Solid), red, Color::Auto),
            FillStyle::solid(red)
        );
        assert!(FillStyle::from_pattern_parts(None, red, Color::Auto).is_none());
        assert!(
            FillStyle::from_pattern_parts(Some(PatternType::Gray125), red, Color::Auto).is_none()
        );
        assert_eq!(
            FillStyle::from_pattern_parts(Some(PatternType::DarkGrid), red, Color::Auto),
            FillStyle::pattern(PatternType::DarkGrid, red, Color::Auto)
        );
    }

    #[test]
    fn test_pattern_from_xlsx() {
        assert_eq!(PatternType::from_xlsx("lightUp"), Some(PatternType::LightUp));
        assert_eq!(PatternType::from_xlsx("sparkles"), None);
    }
}
