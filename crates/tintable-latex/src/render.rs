//! LaTeX text generation

use std::borrow::Cow;

use crate::colors::ColorDefinition;
use crate::options::RenderOptions;
use crate::table::ColoredTable;

/// Escape the characters LaTeX treats specially
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_latex(s: &str) -> Cow<'_, str> {
    if !s.contains(|c: char| matches!(c, '\\' | '&' | '%' | '$' | '#' | '_' | '{' | '}' | '~' | '^')) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// One `\definecolor{HEX}{rgb}{r,g,b}` line per definition
pub fn render_color_definitions(definitions: &[ColorDefinition], options: &RenderOptions) -> String {
    let eol = options.line_ending.as_str();
    let mut out = String::with_capacity(definitions.len() * 40);
    for def in definitions {
        let (r, g, b) = def.rgb();
        // {:?} keeps a trailing ".0" on whole numbers
        out.push_str(&format!(
            "\\definecolor{{{}}}{{rgb}}{{{:?},{:?},{:?}}}{}",
            def.name(),
            r,
            g,
            b,
            eol
        ));
    }
    out
}

/// The complete `tabular` environment
///
/// Column spec is `|l|...|`; the header line carries plain names and every
/// data cell is wrapped as `\cellcolor{HEX}{value}`.
pub fn render_table(table: &ColoredTable, options: &RenderOptions) -> String {
    let eol = options.line_ending.as_str();
    let text = |s: &str| -> String {
        if options.escape {
            escape_latex(s).into_owned()
        } else {
            s.to_string()
        }
    };

    let mut out = String::new();
    let spec = "l|".repeat(table.column_count());
    out.push_str(&format!("\\begin{{tabular}}{{|{}}}{}", spec, eol));
    out.push_str("\\toprule");
    out.push_str(eol);

    let header: Vec<String> = table.header().iter().map(|h| text(h)).collect();
    out.push_str(&format!("{} \\\\{}", header.join(" & "), eol));
    out.push_str("\\midrule");
    out.push_str(eol);

    for row in table.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                format!(
                    "\\cellcolor{{{}}}{{{}}}",
                    cell.color,
                    text(&cell.value.to_string())
                )
            })
            .collect();
        out.push_str(&format!("{} \\\\{}", cells.join(" & "), eol));
    }

    out.push_str("\\bottomrule");
    out.push_str(eol);
    out.push_str("\\end{tabular}");
    out.push_str(eol);
    out
}
