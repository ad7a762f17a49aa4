//! # Lexical analysis
//!
//! The lexer turns a UTF-8 source string into an ordered [`Token`] stream
//! terminated by exactly one `Eof` token. It is *error-tolerant*: a
//! malformed lexeme records a [`jrd_util::Diagnostic`] into the caller's
//! [`jrd_util::ErrorReporter`] and the cursor skips to the next separator
//! rather than aborting the whole scan, so a single `tokenize()` call can
//! surface every lexical error in a document in one pass.
//!
//! ## Driver loop
//!
//! Repeatedly look at the current byte and dispatch:
//! - `{ } [ ] , :` — a single-character token.
//! - `"` — the string DFA ([`lexer::string`]).
//! - `-` or a digit — the number DFA ([`lexer::number`]).
//! - `t`, `f`, `n` — the literal DFA ([`lexer::literal`]).
//! - any ASCII whitespace (including `\n`, which also advances the row) —
//!   skipped.
//! - anything else — an "unknown value" diagnostic, then skip to the next
//!   separator.
//!
//! ## DFAs
//!
//! Three deterministic finite automata do the real recognition work. Each
//! is specified as an explicit state-transition table in the project
//! specification and implemented here as straight-line Rust control flow
//! (a `match` per transition) rather than a literal table — the states are
//! what's load-bearing, not the encoding.
//!
//! - **String**: `START → IN_STRING → (ESCAPE | UNICODE_SEQ)* → END`,
//!   decoding `\" \\ / b f n r t` and `\uXXXX` escapes as it goes, combining
//!   UTF-16 surrogate pairs into a single codepoint when they appear back
//!   to back.
//! - **Number**: sign, then `0` xor `[1-9][0-9]*`, then an optional `.`
//!   fraction, then an optional `e`/`E` exponent (`+`, `-`, or bare
//!   digits). A lexeme is a float iff its text contains `.`, `e`, or `E`;
//!   see [`lexer::number::is_float_lexeme`].
//! - **Literal**: a straight-line character match against `true`, `false`,
//!   or `null`, rejecting if the character after the keyword is not a
//!   separator (catching `truee`) and reporting a "did you mean" guess on
//!   mismatch (catching `nulL`).
//!
//! ## Error recovery
//!
//! On a DFA failure, the lexer records the diagnostic at the lexeme's
//! start position with the length already consumed, then advances until
//! the current character is a *separator* (whitespace, `,`, `:`, `]`, `}`,
//! or end-of-source) before resuming the driver loop. No token is emitted
//! for the failed lexeme.

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use lexer::number::is_float_lexeme;
pub use token::{Token, TokenKind};
