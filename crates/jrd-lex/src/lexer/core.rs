//! The driver loop: dispatches on the current byte to a single-character
//! token, one of the three DFAs, or an error-recovery skip. Adapted from
//! `faxc-lex/src/lexer/core.rs`'s `next_token` dispatch and
//! `report_error`, generalized from a general-purpose-language token set
//! down to JSON's structural characters plus the string/number/literal
//! DFAs.

use jrd_util::{Diagnostic, DiagnosticCode, ErrorReporter, LineIndex};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) reporter: &'a mut ErrorReporter,
    pub(super) line_index: &'a LineIndex,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, line_index: &'a LineIndex, reporter: &'a mut ErrorReporter) -> Self {
        Self { cursor: Cursor::new(source), reporter, line_index }
    }

    /// Runs the driver loop to completion, returning the full token stream
    /// terminated by exactly one `EOF` token (spec §4.2/§8 invariant 2).
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let is_eof = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            if self.cursor.is_at_end() {
                return Token::eof(self.cursor.row(), self.cursor.col());
            }

            let start_pos = self.cursor.position();
            let row = self.cursor.row();
            let col = self.cursor.col();
            let c = self.cursor.current_char();

            let produced = match c {
                '{' => Some(self.single(TokenKind::LBrace, start_pos, row, col)),
                '}' => Some(self.single(TokenKind::RBrace, start_pos, row, col)),
                '[' => Some(self.single(TokenKind::LBracket, start_pos, row, col)),
                ']' => Some(self.single(TokenKind::RBracket, start_pos, row, col)),
                ',' => Some(self.single(TokenKind::Comma, start_pos, row, col)),
                ':' => Some(self.single(TokenKind::Colon, start_pos, row, col)),
                '"' => self.lex_string(start_pos, row, col),
                '-' | '0'..='9' => self.lex_number(start_pos, row, col),
                't' | 'f' | 'n' => self.lex_literal(start_pos, row, col),
                _ => self.lex_unknown(start_pos, row, col),
            };

            if let Some(tok) = produced {
                return tok;
            }
            // A DFA failed and recorded a diagnostic; it already skipped
            // the cursor to the next separator. No token is emitted for
            // the failed lexeme — resume scanning.
        }
    }

    fn single(&mut self, kind: TokenKind, start_pos: usize, row: u32, col: u32) -> Token {
        self.cursor.advance();
        let len = (self.cursor.position() - start_pos) as u32;
        Token::new(kind, String::new(), row, col, len)
    }

    fn skip_whitespace(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char().is_ascii_whitespace() {
            self.cursor.advance();
        }
    }

    fn lex_unknown(&mut self, start_pos: usize, row: u32, col: u32) -> Option<Token> {
        self.cursor.advance();
        self.skip_to_separator();
        let len = (self.cursor.position() - start_pos) as u32;
        self.report_error("unknown value", DiagnosticCode::UNKNOWN_TOKEN, row, col, len);
        None
    }

    /// A *separator* per the glossary: whitespace, `,`, `:`, `]`, `}`, or
    /// end-of-source.
    pub(super) fn is_separator(c: char) -> bool {
        c == crate::cursor::EOF_CHAR || c.is_ascii_whitespace() || matches!(c, ',' | ':' | ']' | '}')
    }

    pub(super) fn at_separator(&self) -> bool {
        Self::is_separator(self.cursor.current_char())
    }

    pub(super) fn skip_to_separator(&mut self) {
        while !self.at_separator() {
            self.cursor.advance();
        }
    }

    pub(super) fn report_error(
        &mut self,
        message: impl Into<String>,
        code: DiagnosticCode,
        row: u32,
        col: u32,
        len: u32,
    ) {
        let excerpt = self.line_index.excerpt(self.cursor.source(), row);
        self.reporter.add(Diagnostic::new(message, code, excerpt, row, col, len));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(src: &str) -> (Vec<Token>, ErrorReporter) {
        let line_index = LineIndex::new(src);
        let mut reporter = ErrorReporter::new();
        let tokens = {
            let lexer = Lexer::new(src, &line_index, &mut reporter);
            lexer.tokenize()
        };
        (tokens, reporter)
    }

    #[test]
    fn structural_chars_emit_single_tokens() {
        let (tokens, reporter) = tokenize("{}[],:");
        assert!(!reporter.has_error());
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn stream_ends_with_exactly_one_eof() {
        let (tokens, _) = tokenize("{}");
        assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn unknown_byte_is_skipped_and_reported() {
        let (tokens, reporter) = tokenize("{ @ }");
        assert!(reporter.has_error());
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::LBrace, TokenKind::RBrace, TokenKind::Eof]);
    }

    #[test]
    fn newline_advances_row() {
        let (tokens, _) = tokenize("{\n}");
        let rbrace = &tokens[1];
        assert_eq!(rbrace.row, 1);
        assert_eq!(rbrace.col, 0);
    }

    /// A token after a multi-byte character must be positioned at its true
    /// byte offset: `["中"` is 5 bytes (`[`, quote, 3-byte `中`, quote), so
    /// the `,` right after the string sits at byte 6, not character index
    /// 4.
    #[test]
    fn token_after_multibyte_string_lands_on_byte_offset() {
        let src = "[\"中\",1]";
        let (tokens, reporter) = tokenize(src);
        assert!(!reporter.has_error());
        let comma = tokens.iter().find(|t| t.kind == TokenKind::Comma).unwrap();
        assert_eq!(comma.row, 0);
        assert_eq!(&src[comma.col as usize..comma.col as usize + 1], ",");
    }

    /// An unknown byte reported on a line that also contains a raw
    /// multi-byte character must still carry a byte-accurate column so the
    /// rendered tilde highlight lands on the right source slice.
    #[test]
    fn unknown_byte_after_multibyte_char_reports_byte_accurate_column() {
        let src = "[\"中\", @]";
        let (_tokens, reporter) = tokenize(src);
        assert!(reporter.has_error());
        let diag = &reporter.diagnostics()[0];
        assert_eq!(diag.row, 0);
        assert_eq!(&src[diag.col as usize..diag.col as usize + diag.len as usize], "@");
    }
}
