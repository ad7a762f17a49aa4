//! Locates and reads a `.json` file from disk.
//!
//! Grounded on `examples/original_source/src/jsonParser.cpp`'s
//! `JsonFile::open_json`: existence, then regular-file, then extension,
//! each a distinct failure mode, checked in that order before any byte is
//! read.

use std::path::Path;

use jrd_util::{FilesystemError, FilesystemResult};

pub fn read_json_file(path: &Path) -> FilesystemResult<String> {
    if !path.exists() {
        return Err(FilesystemError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(FilesystemError::NotRegularFile(path.to_path_buf()));
    }
    let has_json_extension =
        path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.eq_ignore_ascii_case("json")).unwrap_or(false);
    if !has_json_extension {
        return Err(FilesystemError::NotJsonExtension(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|source| FilesystemError::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_reports_not_found() {
        let err = read_json_file(Path::new("/nonexistent/path/to/thing.json")).unwrap_err();
        assert!(matches!(err, FilesystemError::NotFound(_)));
    }

    #[test]
    fn directory_reports_not_regular_file() {
        let dir = TempDir::new().unwrap();
        let err = read_json_file(dir.path()).unwrap_err();
        assert!(matches!(err, FilesystemError::NotRegularFile(_)));
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "{}").unwrap();
        let err = read_json_file(&path).unwrap_err();
        assert!(matches!(err, FilesystemError::NotJsonExtension(_)));
    }

    #[test]
    fn uppercase_extension_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.JSON");
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(read_json_file(&path).unwrap(), "{}");
    }

    #[test]
    fn well_formed_file_reads_through() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"a":1}"#).unwrap();
        assert_eq!(read_json_file(&path).unwrap(), r#"{"a":1}"#);
    }
}
