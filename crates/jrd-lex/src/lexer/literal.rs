//! Literal DFA: a straight-line state sequence per keyword (`t→r→u→e`,
//! `f→a→l→s→e`, `n→u→l→l`) per spec §4.2. No direct teacher counterpart —
//! `faxc-lex` recognizes keywords as identifiers matched against a table,
//! not as their own DFA — so this is shaped the way the teacher's lexer
//! theory docs describe straight-line keyword recognition, cross-checked
//! against `examples/original_source/src/lexer_parser.cpp`'s
//! `_parseLiteral` (`TrueT/R/U/E`, `FalseF/A/L/S/E`, `NullN/U/L1/L2`) for
//! the exact guess-hint wording.

use jrd_util::DiagnosticCode;

use crate::token::{Token, TokenKind};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn lex_literal(&mut self, start_pos: usize, row: u32, col: u32) -> Option<Token> {
        let (keyword, kind) = match self.cursor.current_char() {
            't' => ("true", TokenKind::True),
            'f' => ("false", TokenKind::False),
            'n' => ("null", TokenKind::Null),
            _ => unreachable!("lex_literal only dispatched on t/f/n"),
        };

        for expected in keyword.chars() {
            if self.cursor.current_char() != expected {
                return self.literal_error(start_pos, row, col, keyword);
            }
            self.cursor.advance();
        }

        if !self.at_separator() {
            return self.literal_error(start_pos, row, col, keyword);
        }

        let len = (self.cursor.position() - start_pos) as u32;
        Some(Token::new(kind, String::new(), row, col, len))
    }

    fn literal_error(&mut self, start_pos: usize, row: u32, col: u32, guess: &str) -> Option<Token> {
        self.skip_to_separator();
        let len = (self.cursor.position() - start_pos) as u32;
        self.report_error(
            format!("invalid json literal, may be you mean {guess}?"),
            DiagnosticCode::INVALID_LITERAL,
            row,
            col,
            len,
        );
        None
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
            lexer.lex_literal(0, 0, 0)
        };
        (tok, reporter)
    }

    #[test]
    fn recognizes_true_false_null() {
        assert_eq!(lex_one("true").0.unwrap().kind, TokenKind::True);
        assert_eq!(lex_one("false").0.unwrap().kind, TokenKind::False);
        assert_eq!(lex_one("null").0.unwrap().kind, TokenKind::Null);
    }

    #[test]
    fn misspelled_literal_reports_guess() {
        let (tok, reporter) = lex_one("nulL");
        assert!(tok.is_none());
        assert_eq!(reporter.diagnostics()[0].message, "invalid json literal, may be you mean null?");
    }

    #[test]
    fn literal_glued_to_trailing_junk_is_rejected() {
        let (tok, reporter) = lex_one("truee");
        assert!(tok.is_none());
        assert_eq!(reporter.diagnostics()[0].message, "invalid json literal, may be you mean true?");
    }
}
