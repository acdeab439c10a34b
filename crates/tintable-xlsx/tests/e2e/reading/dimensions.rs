//! Tests for the loaded extent of a sheet.

use crate::Fixture;
use tintable_core::{CellValue, FillStyle};
use tintable_xlsx::XlsxError;

#[test]
fn test_styled_empty_cells_extend_the_grid() {
    let mut reader = Fixture::new()
        .styles(
            "",
            r#"<fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill><fill><patternFill patternType="solid"><fgColor rgb="FF00FF00"/></patternFill></fill>"#,
            r#"<xf numFmtId="0" fillId="0"/><xf numFmtId="0" fillId="2"/>"#,
        )
        .sheet(
            "Grid",
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>h</t></is></c></row><row r="3"><c r="D3" s="1"/></row>"#,
        )
        .open();
    let sheet = reader.read_sheet("Grid").unwrap();

    assert_eq!(sheet.dimensions(), (3, 4));
    assert!(sheet.value_at(2, 3).is_empty());
    assert!(!sheet.fill_at(2, 3).is_none());
    // gaps are empty and unfilled
    assert!(sheet.value_at(1, 1).is_empty());
    assert_eq!(sheet.fill_at(1, 1), FillStyle::None);
}

#[test]
fn test_rows_and_cells_without_references() {
    let mut reader = Fixture::new()
        .sheet(
            "Implied",
            r#"<row><c><v>1</v></c><c><v>2</v></c></row><row><c r="B2"><v>3</v></c><c><v>4</v></c></row>"#,
        )
        .open();
    let sheet = reader.read_sheet("Implied").unwrap();

    assert_eq!(sheet.dimensions(), (2, 3));
    assert_eq!(sheet.value_at(0, 1), &CellValue::Number(2.0));
    assert_eq!(sheet.value_at(1, 1), &CellValue::Number(3.0));
    assert_eq!(sheet.value_at(1, 2), &CellValue::Number(4.0));
}

#[test]
fn test_empty_sheet_and_lookup() {
    let mut reader = Fixture::new()
        .sheet("Blank", "")
        .sheet("Other", r#"<row r="1"><c r="A1"><v>1</v></c></row>"#)
        .open();
    assert_eq!(reader.sheet_names(), vec!["Blank", "Other"]);

    let blank = reader.read_sheet("Blank").unwrap();
    assert!(blank.is_empty());
    assert_eq!(blank.dimensions(), (0, 0));

    let err = reader.read_sheet("Missing").unwrap_err();
    assert!(matches!(err, XlsxError::SheetNotFound { .. }));
    assert_eq!(
        err.to_string(),
        "Sheet not found: 'Missing' (available: Blank, Other)"
    );
}

#[test]
fn test_stray_cell_at_the_sheet_limit_is_an_error() {
    let mut reader = Fixture::new()
        .sheet(
            "Stray",
            r#"<row r="1"><c r="A1"><v>1</v></c></row><row r="1048576"><c r="XFD1048576"><v>2</v></c></row>"#,
        )
        .open();

    match reader.read_sheet("Stray") {
        Err(XlsxError::InvalidFormat(msg)) => {
            assert!(msg.contains("Stray"), "{msg}");
            assert!(msg.contains("1048576 x 16384"), "{msg}");
        }
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}
