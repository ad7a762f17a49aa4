//! String literal DFA: `START`, `IN_STRING`, `ESCAPE`, `UNICODE_SEQ`,
//! `END`, `ERROR` per spec §4.2. Adapted from
//! `faxc-lex/src/lexer/string.rs`'s character-accumulation shape, cross-
//! checked against `examples/original_source/src/lexer_parser.cpp`'s
//! `_parseString` for the exact escape set and unterminated-string
//! behavior.

use jrd_util::DiagnosticCode;

use crate::cursor::EOF_CHAR;
use crate::token::{Token, TokenKind};
use crate::unicode::{combine_surrogates, is_high_surrogate, is_low_surrogate, parse_hex4, push_codepoint};

use super::core::Lexer;

enum Hex4 {
    Ok(u32),
    Incomplete,
    Invalid,
}

impl<'a> Lexer<'a> {
    /// Consumes a `"`-delimited string starting at the opening quote,
    /// returning a `Str` token with escapes resolved, or `None` if the
    /// DFA enters `ERROR` (a diagnostic is recorded and the cursor is
    /// already advanced to the next separator).
    pub(super) fn lex_string(&mut self, start_pos: usize, row: u32, col: u32) -> Option<Token> {
        self.cursor.advance(); // consume opening '"'
        let mut decoded = String::new();

        loop {
            let c = self.cursor.current_char();

            if c == '"' {
                self.cursor.advance();
                let len = (self.cursor.position() - start_pos) as u32;
                return Some(Token::new(TokenKind::Str, decoded, row, col, len));
            }

            if c == '\n' || c == EOF_CHAR {
                let len = (self.cursor.position() - start_pos) as u32;
                self.report_error("missing quotation mark", DiagnosticCode::MISSING_QUOTE, row, col, len);
                self.skip_to_separator();
                return None;
            }

            if c == '\\' {
                self.cursor.advance();
                if !self.lex_escape(&mut decoded, start_pos, row, col) {
                    return None;
                }
                continue;
            }

            decoded.push(c);
            self.cursor.advance();
        }
    }

    /// Handles the character(s) after a `\`. Returns `false` if the DFA
    /// failed (diagnostic already recorded, cursor already skipped).
    fn lex_escape(&mut self, decoded: &mut String, start_pos: usize, row: u32, col: u32) -> bool {
        match self.cursor.current_char() {
            '"' => {
                decoded.push('"');
                self.cursor.advance();
            },
            '\\' => {
                decoded.push('\\');
                self.cursor.advance();
            },
            '/' => {
                decoded.push('/');
                self.cursor.advance();
            },
            'b' => {
                decoded.push('\u{0008}');
                self.cursor.advance();
            },
            'f' => {
                decoded.push('\u{000C}');
                self.cursor.advance();
            },
            'n' => {
                decoded.push('\n');
                self.cursor.advance();
            },
            'r' => {
                decoded.push('\r');
                self.cursor.advance();
            },
            't' => {
                decoded.push('\t');
                self.cursor.advance();
            },
            'u' => {
                self.cursor.advance();
                return self.lex_unicode_escape(decoded, start_pos, row, col);
            },
            _ => {
                let len = (self.cursor.position() - start_pos) as u32;
                self.report_error("invalid escape sequence", DiagnosticCode::INVALID_ESCAPE, row, col, len);
                self.skip_to_separator();
                return false;
            },
        }
        true
    }

    fn lex_unicode_escape(&mut self, decoded: &mut String, start_pos: usize, row: u32, col: u32) -> bool {
        match self.read_hex4() {
            Hex4::Ok(cp) => {
                if is_high_surrogate(cp) {
                    if let Some(low) = self.try_consume_low_surrogate() {
                        push_codepoint(decoded, combine_surrogates(cp, low));
                    } else {
                        push_codepoint(decoded, cp);
                    }
                } else {
                    push_codepoint(decoded, cp);
                }
                true
            },
            Hex4::Incomplete => {
                let len = (self.cursor.position() - start_pos) as u32;
                self.report_error(
                    "incomplete unicode escape",
                    DiagnosticCode::INCOMPLETE_UNICODE_ESCAPE,
                    row,
                    col,
                    len,
                );
                self.skip_to_separator();
                false
            },
            Hex4::Invalid => {
                let len = (self.cursor.position() - start_pos) as u32;
                self.report_error("invalid unicode escape", DiagnosticCode::INVALID_UNICODE_ESCAPE, row, col, len);
                self.skip_to_separator();
                false
            },
        }
    }

    fn read_hex4(&mut self) -> Hex4 {
        let mut digits = String::with_capacity(4);
        for _ in 0..4 {
            let c = self.cursor.current_char();
            if c == '\n' || c == EOF_CHAR {
                return Hex4::Incomplete;
            }
            if !c.is_ascii_hexdigit() {
                self.cursor.advance();
                return Hex4::Invalid;
            }
            digits.push(c);
            self.cursor.advance();
        }
        match parse_hex4(&digits) {
            Some(cp) => Hex4::Ok(cp),
            None => Hex4::Invalid,
        }
    }

    /// Looks ahead (without consuming, unless it matches) for a
    /// `\uDCxx`-shaped low surrogate escape immediately following a high
    /// surrogate, so the two combine into one astral codepoint.
    fn try_consume_low_surrogate(&mut self) -> Option<u32> {
        if self.cursor.current_char() != '\\' || self.cursor.peek_char(1) != 'u' {
            return None;
        }
        let mut digits = String::with_capacity(4);
        for i in 0..4 {
            let c = self.cursor.peek_char(2 + i);
            if !c.is_ascii_hexdigit() {
                return None;
            }
            digits.push(c);
        }
        let cp = parse_hex4(&digits)?;
        if !is_low_surrogate(cp) {
            return None;
        }
        for _ in 0..6 {
            self.cursor.advance();
        }
        Some(cp)
    }
}

#[cfg(test)]
mod tests {
    use jrd_util::{ErrorReporter, LineIndex};

    use super::*;

    fn lex_one(src: &str) -> (Option<Token>, ErrorReporter) {
        let line_index = LineIndex::new(src);
        let mut reporter = ErrorReporter::new();
        let tok = {
            let mut lexer = Lexer::new(src, &line_index, &mut reporter);
            lexer.lex_string(0, 0, 0)
        };
        (tok, reporter)
    }

    #[test]
    fn plain_string() {
        let (tok, reporter) = lex_one("\"hello\"");
        assert!(!reporter.has_error());
        assert_eq!(tok.unwrap().raw_value, "hello");
    }

    #[test]
    fn standard_escapes_decode() {
        let (tok, _) = lex_one("\"a\\nb\\tc\\\"d\"");
        assert_eq!(tok.unwrap().raw_value, "a\nb\tc\"d");
    }

    #[test]
    fn unicode_escape_decodes_bmp_codepoint() {
        let (tok, reporter) = lex_one("\"\\u4e2d\\u6587\"");
        assert!(!reporter.has_error());
        assert_eq!(tok.unwrap().raw_value, "中文");
    }

    #[test]
    fn surrogate_pair_combines_to_astral_codepoint() {
        let (tok, reporter) = lex_one("\"\\uD83D\\uDE00\"");
        assert!(!reporter.has_error());
        assert_eq!(tok.unwrap().raw_value, "\u{1F600}");
    }

    #[test]
    fn unterminated_string_reports_missing_quote() {
        let (tok, reporter) = lex_one("\"unterminated\nrest");
        assert!(tok.is_none());
        assert!(reporter.has_error());
        assert_eq!(reporter.diagnostics()[0].message, "missing quotation mark");
    }

    #[test]
    fn invalid_escape_is_reported() {
        let (tok, reporter) = lex_one("\"bad\\qescape\"");
        assert!(tok.is_none());
        assert_eq!(reporter.diagnostics()[0].message, "invalid escape sequence");
    }

    #[test]
    fn non_hex_digit_in_unicode_escape_is_reported() {
        let (tok, reporter) = lex_one("\"\\u12\"");
        assert!(tok.is_none());
        assert_eq!(reporter.diagnostics()[0].message, "invalid unicode escape");
    }

    #[test]
    fn unicode_escape_cut_off_by_newline_is_incomplete() {
        let (tok, reporter) = lex_one("\"\\u12\n");
        assert!(tok.is_none());
        assert_eq!(reporter.diagnostics()[0].message, "incomplete unicode escape");
    }
}
