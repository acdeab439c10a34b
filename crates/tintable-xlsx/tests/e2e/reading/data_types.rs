//! Tests for reading cell values.

use crate::Fixture;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use pretty_assertions::assert_eq;
use tintable_core::{CellError, CellValue};

fn datetime(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

const DATE_STYLES: (&str, &str, &str) = (
    r#"<numFmt numFmtId="164" formatCode="yyyy\-mm\-dd\ hh:mm"/><numFmt numFmtId="165" formatCode="0.00&quot;d&quot;"/>"#,
    r#"<fill><patternFill patternType="none"/></fill>"#,
    r#"<xf numFmtId="0" fillId="0"/><xf numFmtId="14" fillId="0"/><xf numFmtId="164" fillId="0"/><xf numFmtId="165" fillId="0"/>"#,
);

#[test]
fn test_strings_numbers_and_booleans() {
    let mut reader = Fixture::new()
        .shared_strings(&["Name", "under_x005f_score"])
        .sheet(
            "Values",
            r#"<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c></row>
               <row r="2"><c r="A2"><v>42</v></c><c r="B2"><v>-3.25</v></c><c r="C2" t="b"><v>0</v></c></row>
               <row r="3"><c r="A3" t="str"><f>UPPER("x")</f><v>X</v></c><c r="B3" t="e"><v>#N/A</v></c><c r="C3"><f>A2*2</f><v>84</v></c></row>"#,
        )
        .open();
    let sheet = reader.read_sheet("Values").unwrap();

    assert_eq!(sheet.value_at(0, 0), &CellValue::text("Name"));
    assert_eq!(sheet.value_at(0, 1), &CellValue::text("under_score"));
    assert_eq!(sheet.value_at(1, 0).to_string(), "42");
    assert_eq!(sheet.value_at(1, 1).to_string(), "-3.25");
    assert_eq!(sheet.value_at(1, 2).to_string(), "FALSE");
    assert_eq!(sheet.value_at(2, 0), &CellValue::text("X"));
    assert_eq!(sheet.value_at(2, 1), &CellValue::Error(CellError::Na));
    assert_eq!(sheet.value_at(2, 2), &CellValue::Number(84.0));
}

#[test]
fn test_date_formats_turn_serials_into_dates() {
    let (num_fmts, fills, xfs) = DATE_STYLES;
    let mut reader = Fixture::new()
        .styles(num_fmts, fills, xfs)
        .sheet(
            "Dates",
            r#"<row r="1"><c r="A1" s="1"><v>44197</v></c><c r="B1" s="2"><v>44197.5</v></c><c r="C1" s="3"><v>44197</v></c><c r="D1" s="0"><v>44197</v></c></row>
               <row r="2"><c r="A2" t="d"><v>2021-03-04T05:06:00</v></c></row>"#,
        )
        .open();
    let sheet = reader.read_sheet("Dates").unwrap();

    assert_eq!(sheet.value_at(0, 0), &CellValue::Date(datetime(2021, 1, 1, 0, 0)));
    assert_eq!(sheet.value_at(0, 0).to_string(), "2021-01-01");
    assert_eq!(sheet.value_at(0, 1).to_string(), "2021-01-01 12:00:00");
    // quoted text in a format code is not a date token
    assert_eq!(sheet.value_at(0, 2), &CellValue::Number(44197.0));
    assert_eq!(sheet.value_at(0, 3), &CellValue::Number(44197.0));
    assert_eq!(sheet.value_at(1, 0), &CellValue::Date(datetime(2021, 3, 4, 5, 6)));
}

#[test]
fn test_1904_date_system() {
    let (num_fmts, fills, xfs) = DATE_STYLES;
    let mut reader = Fixture::new()
        .date1904()
        .styles(num_fmts, fills, xfs)
        .sheet("Dates", r#"<row r="1"><c r="A1" s="1"><v>1</v></c></row>"#)
        .open();
    assert!(reader.is_date1904());

    let sheet = reader.read_sheet("Dates").unwrap();
    assert_eq!(sheet.value_at(0, 0), &CellValue::Date(datetime(1904, 1, 2, 0, 0)));
}

#[test]
fn test_time_formats() {
    let mut reader = Fixture::new()
        .styles(
            r#"<numFmt numFmtId="164" formatCode="h:mm"/><numFmt numFmtId="165" formatCode="[h]:mm:ss"/>"#,
            r#"<fill><patternFill patternType="none"/></fill>"#,
            r#"<xf numFmtId="0" fillId="0"/><xf numFmtId="20" fillId="0"/><xf numFmtId="164" fillId="0"/><xf numFmtId="165" fillId="0"/><xf numFmtId="46" fillId="0"/>"#,
        )
        .sheet(
            "Times",
            r#"<row r="1"><c r="A1" s="1"><v>0.5</v></c><c r="B1" s="2"><v>0.25</v></c><c r="C1" s="3"><v>1.5</v></c><c r="D1" s="4"><v>0.0625</v></c><c r="E1" s="1"><v>44197.5</v></c></row>"#,
        )
        .open();
    let sheet = reader.read_sheet("Times").unwrap();

    assert_eq!(
        sheet.value_at(0, 0),
        &CellValue::Time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
    );
    assert_eq!(sheet.value_at(0, 0).to_string(), "12:00:00");
    assert_eq!(sheet.value_at(0, 1).to_string(), "06:00:00");
    assert_eq!(sheet.value_at(0, 2).to_string(), "1 day, 12:00:00");
    assert_eq!(sheet.value_at(0, 3).to_string(), "1:30:00");
    // a time format on a whole-day serial still keeps the date
    assert_eq!(sheet.value_at(0, 4), &CellValue::Date(datetime(2021, 1, 1, 12, 0)));
}
