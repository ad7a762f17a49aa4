//! Diagnostics: one syntax or lexical error, pinned to a line/column/span.

use std::fmt;

/// A stable `category+number` identifier for a diagnostic message class.
/// Not required by any consumer contract; lets tooling filter by kind
/// without string-matching `message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticCode {
    pub category: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    const fn new(category: &'static str, number: u32) -> Self {
        Self { category, number }
    }

    pub const MISSING_QUOTE: DiagnosticCode = Self::new("J-LEX", 1);
    pub const INVALID_ESCAPE: DiagnosticCode = Self::new("J-LEX", 2);
    pub const INCOMPLETE_UNICODE_ESCAPE: DiagnosticCode = Self::new("J-LEX", 3);
    pub const INVALID_UNICODE_ESCAPE: DiagnosticCode = Self::new("J-LEX", 4);
    pub const INCOMPLETE_NUMBER: DiagnosticCode = Self::new("J-LEX", 5);
    pub const INVALID_NUMBER: DiagnosticCode = Self::new("J-LEX", 6);
    pub const INVALID_LITERAL: DiagnosticCode = Self::new("J-LEX", 7);
    pub const UNKNOWN_TOKEN: DiagnosticCode = Self::new("J-LEX", 8);

    pub const TOP_LEVEL_KIND: DiagnosticCode = Self::new("J-SYN", 1);
    pub const OBJECT_KEY_NOT_STRING: DiagnosticCode = Self::new("J-SYN", 2);
    pub const EXPECTED_COLON: DiagnosticCode = Self::new("J-SYN", 3);
    pub const EXPECTED_COMMA: DiagnosticCode = Self::new("J-SYN", 4);
    pub const TRAILING_COMMA: DiagnosticCode = Self::new("J-SYN", 5);
    pub const UNCLOSED_CONTAINER: DiagnosticCode = Self::new("J-SYN", 6);
    pub const UNEXPECTED_VALUE: DiagnosticCode = Self::new("J-SYN", 7);
    pub const INVALID_NUMBER_LITERAL: DiagnosticCode = Self::new("J-SYN", 8);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.category, self.number)
    }
}

/// One collected error: message, the offending line's text, and the
/// caret-highlight coordinates within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub code: DiagnosticCode,
    pub line_excerpt: String,
    /// 0-based row.
    pub row: u32,
    /// 0-based column, as a byte offset within the row (not a character
    /// index), so it stays unit-consistent with `len`.
    pub col: u32,
    /// Byte width of the highlighted span.
    pub len: u32,
}

impl Diagnostic {
    pub fn new(
        message: impl Into<String>,
        code: DiagnosticCode,
        line_excerpt: impl Into<String>,
        row: u32,
        col: u32,
        len: u32,
    ) -> Self {
        Self { message: message.into(), code, line_excerpt: line_excerpt.into(), row, col, len }
    }

    /// Renders the three-line block: `[Row: R, Col: C] message`, the source
    /// line, and a tilde run aligned under `[col, col+len)`.
    pub fn render(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let row_1based = self.row + 1;
        let col_1based = self.col + 1;
        writeln!(f, "[Row: {row_1based}, Col: {col_1based}] {}", self.message)?;
        let gutter = format!("{row_1based}");
        writeln!(f, "{gutter} | {}", self.line_excerpt)?;
        let indent = " ".repeat(gutter.len()) + " | ";
        let pad = " ".repeat(self.col as usize);
        let tildes = "~".repeat(self.len.max(1) as usize);
        writeln!(f, "{indent}{pad}{tildes}")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_displays_as_category_plus_padded_number() {
        assert_eq!(DiagnosticCode::MISSING_QUOTE.to_string(), "J-LEX0001");
    }

    #[test]
    fn render_aligns_tildes_under_highlight() {
        let d = Diagnostic::new(
            "missing quotation mark",
            DiagnosticCode::MISSING_QUOTE,
            "\"oops",
            0,
            0,
            5,
        );
        let mut out = String::new();
        d.render(&mut out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "[Row: 1, Col: 1] missing quotation mark");
        assert_eq!(lines[1], "1 | \"oops");
        assert_eq!(lines[2], "  | ~~~~~");
    }
}
