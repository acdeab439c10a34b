//! Common utilities for E2E tests.

use std::io::{Cursor, Write};

use tintable_xlsx::XlsxReader;

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

/// An in-memory workbook under construction
#[derive(Default)]
pub struct Fixture {
    sheets: Vec<(String, String)>,
    styles: Option<String>,
    shared_strings: Option<String>,
    date1904: bool,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a worksheet whose `<sheetData>` holds `rows`
    pub fn sheet(mut self, name: &str, rows: &str) -> Self {
        self.sheets.push((name.to_string(), rows.to_string()));
        self
    }

    /// Add `xl/styles.xml` with the given `<fills>` and `<cellXfs>` children
    pub fn styles(mut self, num_fmts: &str, fills: &str, xfs: &str) -> Self {
        self.styles = Some(format!(
            r#"<?xml version="1.0"?><styleSheet xmlns="{MAIN_NS}"><numFmts>{num_fmts}</numFmts><fills>{fills}</fills><cellXfs>{xfs}</cellXfs></styleSheet>"#
        ));
        self
    }

    /// Add `xl/sharedStrings.xml` with one plain `<si>` per string
    pub fn shared_strings(mut self, strings: &[&str]) -> Self {
        let items: String = strings
            .iter()
            .map(|s| format!("<si><t>{s}</t></si>"))
            .collect();
        self.shared_strings = Some(format!(r#"<sst xmlns="{MAIN_NS}">{items}</sst>"#));
        self
    }

    /// Use the 1904 date system
    pub fn date1904(mut self) -> Self {
        self.date1904 = true;
        self
    }

    /// Serialize to XLSX bytes
    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();
            let mut add = |name: &str, body: &str| {
                zip.start_file(name, options).unwrap();
                zip.write_all(body.as_bytes()).unwrap();
            };

            add(
                "[Content_Types].xml",
                r#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#,
            );

            let sheet_list: String = self
                .sheets
                .iter()
                .enumerate()
                .map(|(i, (name, _))| {
                    format!(r#"<sheet name="{name}" sheetId="{}" r:id="rId{}"/>"#, i + 1, i + 1)
                })
                .collect();
            let pr = if self.date1904 {
                r#"<workbookPr date1904="1"/>"#
            } else {
                ""
            };
            add(
                "xl/workbook.xml",
                &format!(
                    r#"<?xml version="1.0"?><workbook xmlns="{MAIN_NS}" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">{pr}<sheets>{sheet_list}</sheets></workbook>"#
                ),
            );

            let rels: String = (1..=self.sheets.len())
                .map(|i| {
                    format!(
                        r#"<Relationship Id="rId{i}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{i}.xml"/>"#
                    )
                })
                .collect();
            add(
                "xl/_rels/workbook.xml.rels",
                &format!(
                    r#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
                ),
            );

            for (i, (_, rows)) in self.sheets.iter().enumerate() {
                add(
                    &format!("xl/worksheets/sheet{}.xml", i + 1),
                    &format!(
                        r#"<?xml version="1.0"?><worksheet xmlns="{MAIN_NS}"><sheetData>{rows}</sheetData></worksheet>"#
                    ),
                );
            }
            if let Some(styles) = &self.styles {
                add("xl/styles.xml", styles);
            }
            if let Some(shared) = &self.shared_strings {
                add("xl/sharedStrings.xml", shared);
            }

            zip.finish().unwrap();
        }
        buf
    }

    /// Build and open
    pub fn open(&self) -> XlsxReader<Cursor<Vec<u8>>> {
        XlsxReader::new(Cursor::new(self.build())).expect("fixture should open")
    }
}
