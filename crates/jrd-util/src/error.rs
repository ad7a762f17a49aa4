//! Immediate error kinds. Lexical and syntax errors are collected instead
//! (see [`crate::reporter`]); these are the ones that abort a single
//! operation on the spot, per spec §7's propagation policy.

use std::path::PathBuf;

/// Raised by [`crate::reporter`]'s callers when locating or opening a
/// `.json` file fails, before any parsing begins. Mirrors
/// `examples/original_source/src/jsonParser.cpp`'s `open_json` validation
/// order: existence, then regular-file, then extension.
#[derive(Debug, thiserror::Error)]
pub enum FilesystemError {
    #[error("json file does not exist: {0}")]
    NotFound(PathBuf),

    #[error("path does not point to a regular file: {0}")]
    NotRegularFile(PathBuf),

    #[error("file does not have a .json extension: {0}")]
    NotJsonExtension(PathBuf),

    #[error("error reading json file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type FilesystemResult<T> = Result<T, FilesystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_includes_path() {
        let err = FilesystemError::NotFound(PathBuf::from("missing.json"));
        assert!(err.to_string().contains("missing.json"));
    }
}
