//! # Driver
//!
//! Wires the lexer and parser into two façade entry points and provides
//! the file loader, pretty-printer, and `jrd` CLI binary that consume
//! them. Mirrors `faxc-drv`'s role as the crate that owns orchestration
//! while the compiler-proper (lexer/parser/value model here) stays
//! reusable as a library:
//!
//! ```text
//! from_file/from_string
//!        |
//!        v
//!   LineIndex::new -----> ErrorReporter::new
//!        |                      |
//!        v                      |
//!   Lexer::tokenize  ---------->|
//!        |                      |
//!        v                      |
//!   Parser::parse    ---------->|
//!        |                      |
//!        v                      v
//!     Value              reporter.has_error()?
//!                                |
//!                 yes -----------+----------- no
//!                  v                           v
//!          Err(ErrorReport)              Ok(Value)
//! ```

pub mod loader;
pub mod printer;

use std::path::Path;

use jrd_lex::Lexer;
use jrd_par::{Parser, ParserConfig};
use jrd_util::{ErrorReport, ErrorReporter, FilesystemError, LineIndex};
use jrd_value::{DefaultBuilder, Value};
use tracing::{debug, trace};

/// Parses `text` per `config`. `Ok` only when the lexer and parser raised
/// zero diagnostics between them; otherwise every collected diagnostic is
/// returned together in the `Err`, rendered per `config.throw_all_errors`.
pub fn from_string(text: &str, config: ParserConfig) -> Result<Value, ErrorReport> {
    let line_index = LineIndex::new(text);
    let mut reporter = ErrorReporter::new();

    let value = {
        trace!(bytes = text.len(), "tokenizing source");
        let tokens = Lexer::new(text, &line_index, &mut reporter).tokenize();
        debug!(token_count = tokens.len(), "tokenization complete");

        trace!("parsing token stream");
        let mut parser = Parser::new(text, &line_index, tokens, &mut reporter, config, DefaultBuilder);
        parser.parse()
    };

    if reporter.has_error() {
        debug!(error_count = reporter.error_count(), "parse finished with diagnostics");
        Err(reporter.into_report(config.throw_all_errors))
    } else {
        Ok(value)
    }
}

/// Reads and validates `path` (existence, regular-file, `.json`
/// extension, per [`loader::read_json_file`]) then parses its contents.
///
/// The two failure surfaces are distinct and do not unify: a bad path is
/// a [`jrd_util::FilesystemError`], raised immediately; a bad document is
/// an [`ErrorReport`], collected across the whole source. Callers that
/// need one flat error type should wrap this with `Box<dyn Error>` or a
/// crate-local error enum; the `jrd` binary matches on both variants
/// directly instead.
pub fn from_file(path: &Path, config: ParserConfig) -> Result<Value, FromFileError> {
    let text = loader::read_json_file(path).map_err(FromFileError::Filesystem)?;
    from_string(&text, config).map_err(FromFileError::Syntax)
}

#[derive(Debug, thiserror::Error)]
pub enum FromFileError {
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
    #[error(transparent)]
    Syntax(ErrorReport),
}
