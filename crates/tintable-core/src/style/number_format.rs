//! Number format types
//!
//! Only consulted to tell dates apart from plain numbers: XLSX stores dates
//! as serial numbers and marks them solely through the cell's number format.

/// Number format for cell display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Built-in format by ID
    BuiltIn(u32),

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// Resolve a `numFmtId` against the workbook's custom formats
    pub fn from_id_with<'a, F>(id: u32, custom: F) -> Self
    where
        F: FnOnce(u32) -> Option<&'a str>,
    {
        if id == 0 {
            NumberFormat::General
        } else if let Some(code) = custom(id) {
            NumberFormat::Custom(code.to_string())
        } else {
            NumberFormat::BuiltIn(id)
        }
    }

    /// Check if this is a date/time format
    pub fn is_date_format(&self) -> bool {
        match self {
            // 14-22 are the ECMA-376 date/time formats, 45-47 the mm:ss ones
            NumberFormat::BuiltIn(id) => matches!(id, 14..=22 | 45..=47),
            NumberFormat::Custom(s) => classify_code(s) != CodeKind::Number,
            NumberFormat::General => false,
        }
    }

    /// Check if this is an elapsed-time format (`[h]:mm:ss` and friends)
    pub fn is_elapsed_format(&self) -> bool {
        match self {
            NumberFormat::BuiltIn(id) => *id == 46,
            NumberFormat::Custom(s) => classify_code(s) == CodeKind::Elapsed,
            NumberFormat::General => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeKind {
    Number,
    Date,
    Elapsed,
}

/// Heuristic: the code has date/time placeholders outside of quoted
/// literals, bracketed sections and escaped characters. A bracketed
/// `[h]`, `[mm]` or `[ss]` marks elapsed time.
fn classify_code(code: &str) -> CodeKind {
    // Only the first (positive) section matters
    let mut in_quotes = false;
    let mut bracket: Option<String> = None;
    let mut escaped = false;
    let mut kind = CodeKind::Number;

    for c in code.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        if let Some(content) = bracket.as_mut() {
            if c == ']' {
                if is_elapsed_token(content) {
                    return CodeKind::Elapsed;
                }
                bracket = None;
            } else {
                content.push(c);
            }
            continue;
        }
        match c {
            '"' => in_quotes = !in_quotes,
            _ if in_quotes => {}
            '\\' => escaped = true,
            '[' => bracket = Some(String::new()),
            ';' => break,
            'y' | 'Y' | 'm' | 'M' | 'd' | 'D' | 'h' | 'H' | 's' | 'S' => kind = CodeKind::Date,
            _ => {}
        }
    }

    kind
}

fn is_elapsed_token(content: &str) -> bool {
    let mut chars = content.chars().map(|c| c.to_ascii_lowercase());
    match chars.next() {
        Some(first @ ('h' | 'm' | 's')) => chars.all(|c| c == first),
        _ => false,
    }
}
