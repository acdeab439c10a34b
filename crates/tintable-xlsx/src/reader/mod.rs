//! XLSX reader

mod strings;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::dates::{parse_iso_datetime, serial_to_value};
use crate::error::{XlsxError, XlsxResult};
use crate::styles::{read_styles_xml, CellFormat};
use strings::{decode_excel_escapes, read_shared_strings};
use tintable_core::{Cell, CellAddress, CellError, CellValue, Sheet};

/// A sheet listed in workbook.xml, with its resolved part path
#[derive(Debug, Clone)]
struct SheetEntry {
    name: String,
    path: String,
}

/// XLSX workbook reader
///
/// Opening reads only the workbook index (sheet names and part paths);
/// shared strings, styles and the worksheet itself are parsed by
/// [`XlsxReader::read_sheet`].
pub struct XlsxReader<R> {
    archive: zip::ZipArchive<R>,
    sheets: Vec<SheetEntry>,
    date1904: bool,
}

impl XlsxReader<BufReader<File>> {
    /// Open a workbook from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> XlsxResult<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> XlsxReader<R> {
    /// Open a workbook from a reader
    pub fn new(reader: R) -> XlsxResult<Self> {
        let mut archive = zip::ZipArchive::new(reader)?;

        // Verify this is an XLSX file
        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let (sheet_info, date1904) = read_workbook_xml(&mut archive)?;
        let sheet_paths = read_workbook_rels(&mut archive)?;

        let mut sheets = Vec::with_capacity(sheet_info.len());
        for (name, r_id) in sheet_info {
            match sheet_paths.get(&r_id) {
                Some(path) => sheets.push(SheetEntry {
                    name,
                    path: path.clone(),
                }),
                None => log::warn!("sheet '{}' has no worksheet relationship ({})", name, r_id),
            }
        }

        log::debug!(
            "workbook lists {} sheet(s), date1904={}",
            sheets.len(),
            date1904
        );

        Ok(Self {
            archive,
            sheets,
            date1904,
        })
    }

    /// Names of the worksheets, in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Whether the workbook uses the 1904 date system
    pub fn is_date1904(&self) -> bool {
        self.date1904
    }

    /// Read one worksheet by name (exact match)
    pub fn read_sheet(&mut self, name: &str) -> XlsxResult<Sheet> {
        let entry = self
            .sheets
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| XlsxError::SheetNotFound {
                name: name.to_string(),
                available: self.sheets.iter().map(|s| s.name.clone()).collect(),
            })?;

        let shared_strings = read_shared_strings(&mut self.archive)?;
        let formats = read_styles(&mut self.archive)?;

        let cells = read_worksheet(
            &mut self.archive,
            &entry.path,
            &shared_strings,
            &formats,
            self.date1904,
        )?;

        let sheet = Sheet::from_cells(&entry.name, cells).map_err(|e| {
            XlsxError::InvalidFormat(format!("sheet '{}': {}", entry.name, e))
        })?;
        log::debug!(
            "read sheet '{}' from {}: {} rows x {} columns",
            sheet.name(),
            entry.path,
            sheet.row_count(),
            sheet.column_count()
        );

        Ok(sheet)
    }
}

fn read_styles<R: Read + Seek>(archive: &mut zip::ZipArchive<R>) -> XlsxResult<Vec<CellFormat>> {
    let file = match archive.by_name("xl/styles.xml") {
        Ok(f) => f,
        Err(_) => return Ok(Vec::new()),
    };
    read_styles_xml(file)
}

/// Read workbook.xml: sheet names with their rIds, and the date system
fn read_workbook_xml<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
) -> XlsxResult<(Vec<(String, String)>, bool)> {
    let file = archive
        .by_name("xl/workbook.xml")
        .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

    let reader = BufReader::new(file);
    let mut xml_reader = Reader::from_reader(reader);
    xml_reader.trim_text(true);

    let mut buf = Vec::new();
    let mut sheets = Vec::new();
    let mut date1904 = false;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Empty(e)) | Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"sheet" => {
                    let mut name = None;
                    let mut r_id = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.local_name().as_ref() {
                            b"name" => {
                                name = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"id" => {
                                r_id = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    if let (Some(name), Some(r_id)) = (name, r_id) {
                        sheets.push((name, r_id));
                    }
                }
                b"workbookPr" => {
                    date1904 = attr_value(&e, b"date1904")
                        .map_or(false, |v| v == "1" || v.eq_ignore_ascii_case("true"));
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok((sheets, date1904))
}

/// Read workbook.xml.rels to get worksheet part paths keyed by rId
fn read_workbook_rels<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
) -> XlsxResult<HashMap<String, String>> {
    let file = archive
        .by_name("xl/_rels/workbook.xml.rels")
        .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

    let reader = BufReader::new(file);
    let mut xml_reader = Reader::from_reader(reader);
    xml_reader.trim_text(true);

    let mut buf = Vec::new();
    let mut rels = HashMap::new();

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Empty(e)) | Ok(Event::Start(e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let id = attr_value(&e, b"Id");
                let target = attr_value(&e, b"Target");
                let rel_type = attr_value(&e, b"Type");

                // Only include worksheet relationships
                if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                    if rel_type.ends_with("/worksheet") {
                        rels.insert(id, resolve_part_path(&target));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(rels)
}

/// Targets are relative to `xl/` unless absolute within the package
fn resolve_part_path(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => {
            let relative = target.strip_prefix("./").unwrap_or(target);
            match relative.strip_prefix("../") {
                Some(from_root) => from_root.to_string(),
                None => format!("xl/{}", relative),
            }
        }
    }
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|s| s.to_string()))
}

/// Attributes of a `<c>` element plus the content gathered so far
#[derive(Debug)]
struct PendingCell {
    addr: CellAddress,
    cell_type: Option<String>,
    style: Option<u32>,
    value: Option<String>,
    inline: Option<String>,
}

impl PendingCell {
    fn from_element(e: &BytesStart<'_>, row: u32, next_col: u16) -> XlsxResult<Self> {
        let mut addr = CellAddress::new(row, next_col);
        let mut cell_type = None;
        let mut style = None;

        for attr in e.attributes().flatten() {
            match attr.key.as_ref() {
                b"r" => {
                    let cell_ref = attr.unescape_value()?;
                    addr = CellAddress::parse(&cell_ref).map_err(|err| {
                        XlsxError::Parse(format!("Invalid cell reference '{}': {}", cell_ref, err))
                    })?;
                }
                b"t" => {
                    cell_type = attr.unescape_value().ok().map(|s| s.to_string());
                }
                b"s" => {
                    style = attr
                        .unescape_value()
                        .ok()
                        .and_then(|s| s.parse::<u32>().ok());
                }
                _ => {}
            }
        }

        Ok(Self {
            addr,
            cell_type,
            style,
            value: None,
            inline: None,
        })
    }

    fn finish(
        self,
        shared_strings: &[String],
        formats: &[CellFormat],
        date1904: bool,
    ) -> XlsxResult<(CellAddress, Cell)> {
        let style_idx = self.style.unwrap_or(0) as usize;
        let format = match formats.get(style_idx) {
            Some(f) => f.clone(),
            None => {
                if self.style.is_some() {
                    log::warn!(
                        "cell {} references style {} but only {} exist; using defaults",
                        self.addr,
                        style_idx,
                        formats.len()
                    );
                }
                CellFormat::default()
            }
        };

        let value = convert_value(
            self.cell_type.as_deref(),
            self.value.as_deref(),
            self.inline,
            shared_strings,
            &format,
            date1904,
        )?;

        Ok((self.addr, Cell::new(value, format.fill)))
    }
}

/// Turn the raw `<v>` / `<is>` content into a displayed value
fn convert_value(
    cell_type: Option<&str>,
    raw: Option<&str>,
    inline: Option<String>,
    shared_strings: &[String],
    format: &CellFormat,
    date1904: bool,
) -> XlsxResult<CellValue> {
    if cell_type == Some("inlineStr") {
        return Ok(match (inline, raw) {
            (Some(text), _) => CellValue::Text(decode_excel_escapes(&text).into_owned()),
            (None, Some(v)) => CellValue::Text(decode_excel_escapes(v).into_owned()),
            (None, None) => CellValue::Empty,
        });
    }

    // Formulas without a cached result, and style-only cells
    let Some(raw) = raw else {
        return Ok(CellValue::Empty);
    };

    let value = match cell_type {
        // Shared string
        Some("s") => {
            let idx: usize = raw.trim().parse().map_err(|_| {
                XlsxError::Parse(format!("Invalid shared string index: {}", raw))
            })?;
            let s = shared_strings.get(idx).ok_or_else(|| {
                XlsxError::Parse(format!("Shared string index {} out of bounds", idx))
            })?;
            CellValue::Text(s.clone())
        }

        Some("b") => CellValue::Boolean(raw.trim() == "1" || raw.trim().eq_ignore_ascii_case("true")),

        Some("e") => CellError::parse(raw.trim())
            .map(CellValue::Error)
            .unwrap_or_else(|| CellValue::text(raw)),

        // Formula string result
        Some("str") => CellValue::Text(decode_excel_escapes(raw).into_owned()),

        // ISO 8601 date
        Some("d") => parse_iso_datetime(raw)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::text(raw)),

        None | Some("n") => match raw.trim().parse::<f64>() {
            Ok(n) if format.is_date() => serial_to_value(n, date1904, format.is_elapsed())
                .unwrap_or(CellValue::Number(n)),
            Ok(n) => CellValue::Number(n),
            Err(_) => CellValue::text(raw),
        },

        // Unknown type - treat as text
        Some(_) => CellValue::text(raw),
    };

    Ok(value)
}

/// Read every `<c>` element of a worksheet part
fn read_worksheet<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
    path: &str,
    shared_strings: &[String],
    formats: &[CellFormat],
    date1904: bool,
) -> XlsxResult<Vec<(CellAddress, Cell)>> {
    let file = archive
        .by_name(path)
        .map_err(|_| XlsxError::MissingPart(path.to_string()))?;

    let reader = BufReader::new(file);
    let mut xml_reader = Reader::from_reader(reader);
    // Whitespace inside <t> is significant
    xml_reader.trim_text(false);

    let mut buf = Vec::new();
    let mut cells = Vec::new();

    // Rows and cells may omit their r attribute; track the implied position
    let mut current_row: u32 = 0;
    let mut next_row: u32 = 0;
    let mut next_col: u16 = 0;

    let mut pending: Option<PendingCell> = None;
    let mut in_value = false;
    let mut in_inline_str = false;
    let mut in_phonetic = false;
    let mut in_inline_text = false;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"row" => {
                    current_row = row_index(&e, next_row);
                    next_row = current_row + 1;
                    next_col = 0;
                }
                b"c" => {
                    let cell = PendingCell::from_element(&e, current_row, next_col)?;
                    next_col = cell.addr.col.saturating_add(1);
                    pending = Some(cell);
                }
                b"v" if pending.is_some() => in_value = true,
                b"is" if pending.is_some() => in_inline_str = true,
                b"rPh" if in_inline_str => in_phonetic = true,
                b"t" if in_inline_str && !in_phonetic => {
                    in_inline_text = true;
                    if let Some(cell) = pending.as_mut() {
                        cell.inline.get_or_insert_with(String::new);
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"row" => {
                    current_row = row_index(&e, next_row);
                    next_row = current_row + 1;
                    next_col = 0;
                }
                b"c" => {
                    let cell = PendingCell::from_element(&e, current_row, next_col)?;
                    next_col = cell.addr.col.saturating_add(1);
                    cells.push(cell.finish(shared_strings, formats, date1904)?);
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_value || in_inline_text {
                    let text = e.unescape()?;
                    if let Some(cell) = pending.as_mut() {
                        let target = if in_value {
                            cell.value.get_or_insert_with(String::new)
                        } else {
                            cell.inline.get_or_insert_with(String::new)
                        };
                        target.push_str(&text);
                    }
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"c" => {
                    if let Some(cell) = pending.take() {
                        cells.push(cell.finish(shared_strings, formats, date1904)?);
                    }
                    in_value = false;
                    in_inline_str = false;
                    in_inline_text = false;
                }
                b"v" => in_value = false,
                b"is" => in_inline_str = false,
                b"rPh" => in_phonetic = false,
                b"t" => in_inline_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(cells)
}

/// 0-based row index from a `<row r="..">` element
fn row_index(e: &BytesStart<'_>, implied: u32) -> u32 {
    attr_value(e, b"r")
        .and_then(|r| r.parse::<u32>().ok())
        .map_or(implied, |r| r.saturating_sub(1))
}
