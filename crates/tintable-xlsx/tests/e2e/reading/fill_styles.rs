//! Tests for reading cell background fills.

use crate::Fixture;
use pretty_assertions::assert_eq;
use tintable_core::{Color, FillStyle, PatternType};

const FILLS: &str = concat!(
    r#"<fill><patternFill patternType="none"/></fill>"#,
    r#"<fill><patternFill patternType="gray125"/></fill>"#,
    r#"<fill><patternFill patternType="solid"><fgColor rgb="FF638EC6"/><bgColor indexed="64"/></patternFill></fill>"#,
    r#"<fill><patternFill patternType="solid"><fgColor theme="5" tint="-0.249977111117893"/><bgColor indexed="64"/></patternFill></fill>"#,
    r#"<fill><patternFill patternType="lightGrid"><fgColor auto="1"/><bgColor rgb="FFFFFF00"/></patternFill></fill>"#,
    r#"<fill><gradientFill degree="90"><stop position="0"><color rgb="FFFFFFFF"/></stop><stop position="1"><color rgb="FF4F81BD"/></stop></gradientFill></fill>"#,
    r#"<fill><patternFill patternType="solid"><fgColor indexed="10"/></patternFill></fill>"#,
);

const XFS: &str = concat!(
    r#"<xf numFmtId="0" fillId="0"/>"#,
    r#"<xf numFmtId="0" fillId="1"/>"#,
    r#"<xf numFmtId="0" fillId="2"/>"#,
    r#"<xf numFmtId="0" fillId="3"/>"#,
    r#"<xf numFmtId="0" fillId="4"/>"#,
    r#"<xf numFmtId="0" fillId="5"/>"#,
    r#"<xf numFmtId="0" fillId="6"/>"#,
);

fn read_fills() -> tintable_core::Sheet {
    let cells: String = (0..7)
        .map(|s| format!(r#"<c r="{}1" s="{s}"><v>{s}</v></c>"#, (b'A' + s as u8) as char))
        .collect();
    let mut reader = Fixture::new()
        .styles("", FILLS, XFS)
        .sheet("Fills", &format!(r#"<row r="1">{cells}</row>"#))
        .open();
    reader.read_sheet("Fills").unwrap()
}

#[test]
fn test_no_fill_and_gray125_are_none() {
    let sheet = read_fills();
    assert_eq!(sheet.fill_at(0, 0), FillStyle::None);
    assert_eq!(sheet.fill_at(0, 1), FillStyle::None);
}

#[test]
fn test_solid_rgb_fill() {
    let sheet = read_fills();
    assert_eq!(
        sheet.fill_at(0, 2),
        FillStyle::solid(Color::argb(0xFF, 0x63, 0x8E, 0xC6))
    );
}

#[test]
fn test_theme_fill_keeps_index_and_tint() {
    let sheet = read_fills();
    assert_eq!(sheet.fill_at(0, 3), FillStyle::solid(Color::theme(5, -25)));
}

#[test]
fn test_pattern_fill_keeps_both_colors() {
    let sheet = read_fills();
    assert_eq!(
        sheet.fill_at(0, 4),
        FillStyle::pattern(
            PatternType::LightGrid,
            Color::Auto,
            Color::argb(0xFF, 0xFF, 0xFF, 0x00)
        )
    );
}

#[test]
fn test_gradient_and_indexed_fills() {
    let sheet = read_fills();
    assert_eq!(sheet.fill_at(0, 5), FillStyle::Gradient);
    assert_eq!(sheet.fill_at(0, 6), FillStyle::solid(Color::Indexed(10)));
}
