//! Recursive-descent parser with panic-mode error recovery, per spec §4.3.
//!
//! Grounded on `faxc-par/src/lib.rs`'s `Parser<'a>` shape (`tokens`,
//! `position`, `prev_position`) and its `recover_to_sync_point`/`expect`
//! naming, generalized from a full expression/statement grammar down to
//! JSON's four productions. The teacher's Pratt-parsing binding-power
//! table has no JSON counterpart (no operators) and is not carried over.

use jrd_lex::{is_float_lexeme, Token, TokenKind};
use jrd_util::{Diagnostic, DiagnosticCode, ErrorReporter, LineIndex};
use jrd_value::ValueBuilder;
use rustc_hash::FxHashMap;

use crate::config::ParserConfig;

/// Grammar (effective):
/// ```text
/// root     := object | array
/// value    := object | array | STR | NUM | TRUE | FALSE | NULL
/// object   := '{' (member (',' member)*)? '}'
/// member   := STR ':' value
/// array    := '[' (value (',' value)*)? ']'
/// ```
pub struct Parser<'a, B: ValueBuilder> {
    tokens: Vec<Token>,
    position: usize,
    prev_position: usize,
    source: &'a str,
    line_index: &'a LineIndex,
    reporter: &'a mut ErrorReporter,
    config: ParserConfig,
    builder: B,
}

enum SyncOutcome {
    Continue,
    Break,
}

impl<'a, B: ValueBuilder> Parser<'a, B> {
    pub fn new(
        source: &'a str,
        line_index: &'a LineIndex,
        tokens: Vec<Token>,
        reporter: &'a mut ErrorReporter,
        config: ParserConfig,
        builder: B,
    ) -> Self {
        assert!(!tokens.is_empty(), "token stream must contain at least one EOF token");
        Self { tokens, position: 0, prev_position: 0, source, line_index, reporter, config, builder }
    }

    /// Parses the root value. Always returns *something* — on an
    /// unrecoverable top-level error the container "still returns what it
    /// managed to collect" (spec §4.3), down to `Null` for a truly empty
    /// input.
    pub fn parse(&mut self) -> B::Value {
        let top_level_ok =
            self.config.allow_bare_scalar || matches!(self.current().kind, TokenKind::LBrace | TokenKind::LBracket);
        if !top_level_ok {
            self.report_current("json top level should be object or array", DiagnosticCode::TOP_LEVEL_KIND);
            if self.current().kind == TokenKind::Eof {
                return self.builder.null();
            }
        }
        self.parse_value()
    }

    fn parse_value(&mut self) -> B::Value {
        match self.current().kind {
            TokenKind::LBrace => self.parse_object(),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::Str => {
                let text = self.advance().raw_value;
                self.builder.string(text)
            },
            TokenKind::Num => self.parse_number(),
            TokenKind::True => {
                self.advance();
                self.builder.bool(true)
            },
            TokenKind::False => {
                self.advance();
                self.builder.bool(false)
            },
            TokenKind::Null => {
                self.advance();
                self.builder.null()
            },
            _ => {
                self.report_current("expected a valid json value type here", DiagnosticCode::UNEXPECTED_VALUE);
                self.builder.null()
            },
        }
    }

    /// Numeric dispatch per spec §4.3: a float iff the lexeme contains
    /// `.`, `e`, or `E`; otherwise an integer, promoted to float on
    /// overflow (DESIGN.md Open Question 4) rather than failing the parse.
    fn parse_number(&mut self) -> B::Value {
        let tok = self.advance();
        if is_float_lexeme(&tok.raw_value) {
            match tok.raw_value.parse::<f64>() {
                Ok(f) => self.builder.float(f),
                Err(_) => {
                    self.report_at(&tok, "invalid number literal", DiagnosticCode::INVALID_NUMBER_LITERAL);
                    self.builder.float(0.0)
                },
            }
        } else {
            match tok.raw_value.parse::<i64>() {
                Ok(i) => self.builder.int(i),
                Err(_) => match tok.raw_value.parse::<f64>() {
                    Ok(f) => self.builder.float(f),
                    Err(_) => {
                        self.report_at(&tok, "invalid number literal", DiagnosticCode::INVALID_NUMBER_LITERAL);
                        self.builder.int(0)
                    },
                },
            }
        }
    }

    fn parse_object(&mut self) -> B::Value {
        self.advance(); // consume '{'
        let mut map: FxHashMap<String, B::Value> = FxHashMap::default();

        if self.current().kind == TokenKind::RBrace {
            self.advance();
            return self.builder.object(map);
        }

        loop {
            if self.current().kind == TokenKind::Eof {
                self.report_unclosed("json object not closed");
                break;
            }

            if self.current().kind != TokenKind::Str {
                self.report_current("object key must be string", DiagnosticCode::OBJECT_KEY_NOT_STRING);
                if let SyncOutcome::Break = self.synchronize(TokenKind::RBrace, "json object not closed") {
                    break;
                }
                continue;
            }
            let key = self.advance().raw_value;

            if self.current().kind != TokenKind::Colon {
                self.report_prev_end("expected a colon after key", DiagnosticCode::EXPECTED_COLON);
                if let SyncOutcome::Break = self.synchronize(TokenKind::RBrace, "json object not closed") {
                    break;
                }
                continue;
            }
            self.advance(); // consume ':'

            let value = self.parse_value();
            // Duplicate keys: last write wins (DESIGN.md Open Question 3).
            map.insert(key, value);

            match self.current().kind {
                TokenKind::Comma => {
                    self.advance();
                    if self.current().kind == TokenKind::RBrace {
                        self.close_after_trailing_comma(TokenKind::RBrace);
                        break;
                    }
                },
                TokenKind::RBrace => {
                    self.advance();
                    break;
                },
                TokenKind::Eof => {
                    self.report_unclosed("json object not closed");
                    break;
                },
                _ => {
                    self.report_prev_end("expected ',' or '}' here", DiagnosticCode::EXPECTED_COMMA);
                    if let SyncOutcome::Break = self.synchronize(TokenKind::RBrace, "json object not closed") {
                        break;
                    }
                },
            }
        }

        self.builder.object(map)
    }

    fn parse_array(&mut self) -> B::Value {
        self.advance(); // consume '['
        let mut items = Vec::new();

        if self.current().kind == TokenKind::RBracket {
            self.advance();
            return self.builder.array(items);
        }

        loop {
            if self.current().kind == TokenKind::Eof {
                self.report_unclosed("json array not closed");
                break;
            }

            if !self.current().kind.starts_value() {
                self.report_current("expected a valid json value type here", DiagnosticCode::UNEXPECTED_VALUE);
                if let SyncOutcome::Break = self.synchronize(TokenKind::RBracket, "json array not closed") {
                    break;
                }
                continue;
            }

            items.push(self.parse_value());

            match self.current().kind {
                TokenKind::Comma => {
                    self.advance();
                    if self.current().kind == TokenKind::RBracket {
                        self.close_after_trailing_comma(TokenKind::RBracket);
                        break;
                    }
                },
                TokenKind::RBracket => {
                    self.advance();
                    break;
                },
                TokenKind::Eof => {
                    self.report_unclosed("json array not closed");
                    break;
                },
                _ => {
                    self.report_prev_end("expected ',' or ']' here", DiagnosticCode::EXPECTED_COMMA);
                    if let SyncOutcome::Break = self.synchronize(TokenKind::RBracket, "json array not closed") {
                        break;
                    }
                },
            }
        }

        self.builder.array(items)
    }

    fn close_after_trailing_comma(&mut self, close_kind: TokenKind) {
        if !self.config.allow_trailing_comma {
            self.report_current("trailing comma is not allowed", DiagnosticCode::TRAILING_COMMA);
        }
        debug_assert_eq!(self.current().kind, close_kind);
        self.advance();
    }

    /// Panic-mode recovery: advance until the current token is a
    /// synchronization point, then branch per spec §4.3. Returns
    /// `Break` when the enclosing loop should exit (a close bracket was
    /// consumed, or EOF was hit), `Continue` when it should retry the
    /// member/element it was in the middle of.
    fn synchronize(&mut self, close_kind: TokenKind, unclosed_message: &'static str) -> SyncOutcome {
        self.recover_to_sync_point();
        match self.current().kind {
            TokenKind::Comma => {
                self.advance();
                if self.current().kind == close_kind {
                    self.close_after_trailing_comma(close_kind);
                    SyncOutcome::Break
                } else {
                    SyncOutcome::Continue
                }
            },
            kind if kind == close_kind => {
                self.advance();
                SyncOutcome::Break
            },
            TokenKind::RBrace | TokenKind::RBracket => {
                // A mismatched close bracket still exits the enclosing
                // loop per spec: "If it is a close-bracket, exit the
                // enclosing loop."
                self.advance();
                SyncOutcome::Break
            },
            TokenKind::Eof => {
                self.report_unclosed(unclosed_message);
                SyncOutcome::Break
            },
            _ => SyncOutcome::Continue,
        }
    }

    fn recover_to_sync_point(&mut self) {
        while !self.current().kind.is_sync_point() {
            self.advance();
        }
    }

    fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.position].clone();
        self.prev_position = self.position;
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        tok
    }

    fn report_current(&mut self, message: impl Into<String>, code: DiagnosticCode) {
        let row = self.current().row;
        let col = self.current().col;
        let len = self.current().len.max(1);
        self.emit(message, code, row, col, len);
    }

    fn report_at(&mut self, tok: &Token, message: impl Into<String>, code: DiagnosticCode) {
        self.emit(message, code, tok.row, tok.col, tok.len.max(1));
    }

    /// Highlights the column just past the previous token, per spec
    /// §4.3's "expected X" diagnostics.
    fn report_prev_end(&mut self, message: impl Into<String>, code: DiagnosticCode) {
        let prev = &self.tokens[self.prev_position];
        let (row, col) = (prev.row, prev.col + prev.len.max(1));
        self.emit(message, code, row, col, 1);
    }

    fn report_unclosed(&mut self, message: &'static str) {
        let prev = &self.tokens[self.prev_position];
        let (row, col) = (prev.row, prev.col + prev.len.max(1));
        self.emit(message, DiagnosticCode::UNCLOSED_CONTAINER, row, col, 1);
    }

    fn emit(&mut self, message: impl Into<String>, code: DiagnosticCode, row: u32, col: u32, len: u32) {
        let excerpt = self.line_index.excerpt(self.source, row);
        self.reporter.add(Diagnostic::new(message, code, excerpt, row, col, len));
    }
}
