//! XLSX styles (styles.xml) reading
//!
//! Only fills and number formats are resolved; fonts, borders and
//! alignment have no counterpart in the LaTeX output.

use std::collections::HashMap;
use std::io::{BufReader, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use tintable_core::style::{Color, FillStyle, NumberFormat, PatternType};

/// The resolved `cellXfs` entry a cell's `s` attribute points at
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct CellFormat {
    pub fill: FillStyle,
    pub number_format: NumberFormat,
}

impl CellFormat {
    pub fn is_date(&self) -> bool {
        self.number_format.is_date_format()
    }

    pub fn is_elapsed(&self) -> bool {
        self.number_format.is_elapsed_format()
    }
}

#[derive(Default)]
struct FillBuilder {
    pattern: Option<PatternType>,
    fg: Color,
    bg: Color,
    gradient: bool,
}

impl FillBuilder {
    fn finish(self) -> FillStyle {
        if self.gradient {
            FillStyle::Gradient
        } else {
            FillStyle::from_pattern_parts(self.pattern, self.fg, self.bg)
        }
    }
}

/// Parse styles.xml into the `cellXfs` table
pub(crate) fn read_styles_xml<R: Read>(reader: R) -> XlsxResult<Vec<CellFormat>> {
    let mut xml_reader = Reader::from_reader(BufReader::new(reader));
    xml_reader.trim_text(true);

    let mut buf = Vec::new();

    let mut numfmts: HashMap<u32, String> = HashMap::new();
    let mut fills: Vec<FillStyle> = Vec::new();
    // (numFmtId, fillId) per cellXfs entry
    let mut xfs: Vec<(u32, u32)> = Vec::new();

    let mut in_fills = false;
    let mut in_cell_xfs = false;
    let mut current_fill: Option<FillBuilder> = None;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"fills" => in_fills = true,
                b"cellXfs" => in_cell_xfs = true,
                b"fill" if in_fills => current_fill = Some(FillBuilder::default()),
                b"patternFill" => {
                    if let Some(fill) = current_fill.as_mut() {
                        fill.pattern = parse_pattern_attr(&e);
                    }
                }
                b"gradientFill" => {
                    if let Some(fill) = current_fill.as_mut() {
                        fill.gradient = true;
                    }
                }
                b"fgColor" | b"bgColor" => apply_fill_color(current_fill.as_mut(), &e),
                b"xf" if in_cell_xfs => xfs.push(parse_xf_attrs(&e)),
                _ => {}
            },

            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"numFmt" => {
                    if let Some((id, code)) = parse_numfmt_attrs(&e) {
                        numfmts.insert(id, code);
                    }
                }
                b"fill" if in_fills => fills.push(FillStyle::None),
                b"patternFill" => {
                    if let Some(fill) = current_fill.as_mut() {
                        fill.pattern = parse_pattern_attr(&e);
                    }
                }
                b"fgColor" | b"bgColor" => apply_fill_color(current_fill.as_mut(), &e),
                b"xf" if in_cell_xfs => xfs.push(parse_xf_attrs(&e)),
                _ => {}
            },

            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"fills" => in_fills = false,
                b"cellXfs" => in_cell_xfs = false,
                b"fill" => {
                    if let Some(fill) = current_fill.take() {
                        fills.push(fill.finish());
                    }
                }
                _ => {}
            },

            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    log::debug!(
        "styles.xml: {} fills, {} cell formats, {} custom number formats",
        fills.len(),
        xfs.len(),
        numfmts.len()
    );

    let formats = xfs
        .into_iter()
        .map(|(num_fmt_id, fill_id)| CellFormat {
            fill: fills.get(fill_id as usize).copied().unwrap_or_default(),
            number_format: NumberFormat::from_id_with(num_fmt_id, |id| {
                numfmts.get(&id).map(String::as_str)
            }),
        })
        .collect();

    Ok(formats)
}

fn parse_pattern_attr(e: &BytesStart<'_>) -> Option<PatternType> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"patternType")
        .and_then(|attr| {
            attr.unescape_value()
                .ok()
                .and_then(|v| PatternType::from_xlsx(&v))
        })
}

fn apply_fill_color(fill: Option<&mut FillBuilder>, e: &BytesStart<'_>) {
    let Some(fill) = fill else {
        return;
    };
    let color = parse_color_attrs(e);
    if e.local_name().as_ref() == b"fgColor" {
        fill.fg = color;
    } else {
        fill.bg = color;
    }
}

fn parse_xf_attrs(e: &BytesStart<'_>) -> (u32, u32) {
    let mut num_fmt_id = 0u32;
    let mut fill_id = 0u32;

    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"numFmtId" => {
                num_fmt_id = attr
                    .unescape_value()
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0);
            }
            b"fillId" => {
                fill_id = attr
                    .unescape_value()
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0);
            }
            _ => {}
        }
    }

    (num_fmt_id, fill_id)
}

fn parse_numfmt_attrs(e: &BytesStart<'_>) -> Option<(u32, String)> {
    let mut id = None;
    let mut code = None;
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"numFmtId" => id = attr.unescape_value().ok().and_then(|s| s.parse().ok()),
            b"formatCode" => code = attr.unescape_value().ok().map(|s| s.to_string()),
            _ => {}
        }
    }
    Some((id?, code?))
}

/// Parse a color element (`rgb`, `theme`/`tint`, `indexed`, `auto`)
pub(crate) fn parse_color_attrs(e: &BytesStart<'_>) -> Color {
    // Priority: rgb > theme > indexed > auto
    let mut rgb: Option<String> = None;
    let mut theme: Option<u8> = None;
    let mut tint: Option<f64> = None;
    let mut indexed: Option<u8> = None;

    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"rgb" => {
                rgb = attr.unescape_value().ok().map(|s| s.to_string());
            }
            b"theme" => {
                theme = attr
                    .unescape_value()
                    .ok()
                    .and_then(|s| s.parse::<u8>().ok());
            }
            b"tint" => {
                tint = attr
                    .unescape_value()
                    .ok()
                    .and_then(|s| s.parse::<f64>().ok());
            }
            b"indexed" => {
                indexed = attr
                    .unescape_value()
                    .ok()
                    .and_then(|s| s.parse::<u8>().ok());
            }
            _ => {}
        }
    }

    if let Some(color) = rgb.as_deref().and_then(Color::from_hex) {
        return color;
    }

    if let Some(index) = theme {
        let tint_i8 = tint.map(|t| (t * 100.0).round() as i8).unwrap_or(0);
        return Color::Theme {
            index,
            tint: tint_i8,
        };
    }

    if let Some(i) = indexed {
        return Color::Indexed(i);
    }

    Color::Auto
}
