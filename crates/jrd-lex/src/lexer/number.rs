//! Number literal DFA: `START`, `SIGN`, `ZERO`, `INTEGRAL`,
//! `FRACTION_BEGIN`, `FRACTION`, `EXPONENT_BEGIN`, `EXPONENT_SIGN`,
//! `EXPONENT`, `END`, `ERROR` per spec §4.2, scanned straight-line rather
//! than as an explicit state table (the spec permits either; see §9's
//! "DFAs implemented as large switch trees" redesign note). Adapted from
//! `faxc-lex/src/lexer/number.rs`'s digit-scanning shape; the hex/octal/
//! binary radix dispatch there has no JSON counterpart and is dropped.
//!
//! Per DESIGN.md's Open Question 2 decision, the exponent accepts a `+`
//! sign in addition to `-` and bare digits, a strict widening of
//! `examples/original_source/src/lexer_parser.cpp`'s `_parseNumber`, which
//! rejects it.

use jrd_util::DiagnosticCode;

use crate::token::{Token, TokenKind};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn lex_number(&mut self, start_pos: usize, row: u32, col: u32) -> Option<Token> {
        if self.cursor.current_char() == '-' {
            self.cursor.advance();
        }

        if !self.cursor.current_char().is_ascii_digit() {
            return self.number_error(start_pos, row, col, "invalid number literal");
        }

        let leading_zero = self.cursor.current_char() == '0';
        self.cursor.advance();
        if leading_zero {
            if self.cursor.current_char().is_ascii_digit() {
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
                return self.number_error(start_pos, row, col, "invalid number literal");
            }
        } else {
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if self.cursor.current_char() == '.' {
            self.cursor.advance();
            let frac_start = self.cursor.position();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            if self.cursor.position() == frac_start {
                return self.number_error(start_pos, row, col, "invalid number literal");
            }
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            let exp_start = self.cursor.position();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            if self.cursor.position() == exp_start {
                return self.number_error(start_pos, row, col, "incomplete number literal");
            }
        }

        if !self.at_separator() {
            return self.number_error(start_pos, row, col, "invalid number literal");
        }

        let raw = self.cursor.slice_from(start_pos).to_string();
        let len = raw.len() as u32;
        Some(Token::new(TokenKind::Num, raw, row, col, len))
    }

    fn number_error(&mut self, start_pos: usize, row: u32, col: u32, message: &'static str) -> Option<Token> {
        self.skip_to_separator();
        let len = (self.cursor.position() - start_pos) as u32;
        let code = if message.starts_with("incomplete") {
            DiagnosticCode::INCOMPLETE_NUMBER
        } else {
            DiagnosticCode::INVALID_NUMBER
        };
        self.report_error(message, code, row, col, len);
        None
    }
}

/// `true` iff `raw` is a float-dispatching lexeme per spec §4.3: contains
/// `.`, `e`, or `E`.
pub fn is_float_lexeme(raw: &str) -> bool {
    raw.contains(['.', 'e', 'E'])
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
            lexer.lex_number(0, 0, 0)
        };
        (tok, reporter)
    }

    #[test]
    fn plain_integer() {
        let (tok, reporter) = lex_one("42");
        assert!(!reporter.has_error());
        assert_eq!(tok.unwrap().raw_value, "42");
    }

    #[test]
    fn negative_integer() {
        let (tok, _) = lex_one("-7");
        assert_eq!(tok.unwrap().raw_value, "-7");
    }

    #[test]
    fn zero_alone_is_valid() {
        let (tok, reporter) = lex_one("0");
        assert!(!reporter.has_error());
        assert_eq!(tok.unwrap().raw_value, "0");
    }

    #[test]
    fn leading_zero_followed_by_digit_is_invalid() {
        let (tok, reporter) = lex_one("00");
        assert!(tok.is_none());
        assert_eq!(reporter.diagnostics()[0].message, "invalid number literal");
    }

    #[test]
    fn float_with_fraction() {
        let (tok, _) = lex_one("3.14");
        assert_eq!(tok.unwrap().raw_value, "3.14");
    }

    #[test]
    fn trailing_dot_with_no_fraction_digits_is_invalid() {
        let (tok, reporter) = lex_one("12.");
        assert!(tok.is_none());
        assert_eq!(reporter.diagnostics()[0].message, "invalid number literal");
    }

    #[test]
    fn trailing_e_with_no_exponent_digits_is_incomplete() {
        let (tok, reporter) = lex_one("12e");
        assert!(tok.is_none());
        assert_eq!(reporter.diagnostics()[0].message, "incomplete number literal");
    }

    #[test]
    fn exponent_accepts_plus_sign() {
        let (tok, reporter) = lex_one("1e+10");
        assert!(!reporter.has_error());
        assert_eq!(tok.unwrap().raw_value, "1e+10");
    }

    #[test]
    fn exponent_accepts_minus_sign() {
        let (tok, _) = lex_one("2.5e-3");
        assert_eq!(tok.unwrap().raw_value, "2.5e-3");
    }

    #[test]
    fn is_float_lexeme_detects_dot_or_exponent() {
        assert!(!is_float_lexeme("42"));
        assert!(is_float_lexeme("4.2"));
        assert!(is_float_lexeme("4e2"));
        assert!(is_float_lexeme("4E2"));
    }
}
