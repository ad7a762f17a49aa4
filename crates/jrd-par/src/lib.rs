//! # Syntactic analysis
//!
//! Turns a [`jrd_lex::Token`] stream into a value tree via a caller-supplied
//! [`jrd_value::ValueBuilder`]. Like the lexer, the parser is
//! error-tolerant: a syntax violation records a diagnostic and the parser
//! enters panic-mode recovery (spec §4.3) rather than aborting, so a
//! single `parse()` call surfaces every syntax error in a document and
//! still returns the best value tree it could assemble.
//!
//! ```text
//! source --Lexer::tokenize--> Vec<Token> --Parser::parse--> B::Value
//! ```

pub mod config;
mod parser;

pub use config::ParserConfig;
pub use parser::Parser;
