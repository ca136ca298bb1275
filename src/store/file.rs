//! Atomic file replacement and tolerant reads
//!
//! Every store write lands in a temporary file next to its target and is then
//! renamed over it, so readers see either the old content or the new content.
//! Reads never fail: missing or unparseable content yields the default value.

use super::StoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::warn;

/// Replace `path` with `contents` in one step
///
/// # Errors
///
/// Returns `StoreError::StorageWriteFailed` if the directory cannot be created,
/// the temporary file cannot be written, or the final rename fails.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let fail = |source: io::Error| StoreError::StorageWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(fail)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(fail)?;
    temp_file.write_all(contents).map_err(fail)?;
    temp_file.as_file().sync_all().map_err(fail)?;
    temp_file.persist(path).map_err(|e| fail(e.error))?;
    Ok(())
}

/// Serialize `value` as pretty JSON and replace `path` with it
///
/// # Errors
///
/// Returns `StoreError::StorageWriteFailed` on any write failure.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let mut json = serde_json::to_vec_pretty(value).map_err(|e| StoreError::StorageWriteFailed {
        path: path.to_path_buf(),
        source: io::Error::other(e),
    })?;
    json.push(b'\n');
    write_atomic(path, &json)
}

/// Load JSON from `path`, falling back to `T::default()`
///
/// A missing file is silent; unreadable or corrupt content is logged.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable store file, using defaults");
            return T::default();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "corrupt store file, using defaults");
        T::default()
    })
}

/// Load a line-per-entry text file
///
/// Returns `None` if the file does not exist. Other read failures are logged and
/// treated as an empty file.
pub fn read_lines(path: &Path) -> Option<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Some(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable list file, treating as empty");
            Some(Vec::new())
        }
    }
}

/// Replace `path` with one entry per line
///
/// # Errors
///
/// Returns `StoreError::StorageWriteFailed` on any write failure.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), StoreError> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    write_atomic(path, content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn write_atomic_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/file.txt");

        write_atomic(&path, b"hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn write_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");

        write_atomic(&path, b"a much longer first version").unwrap();
        write_atomic(&path, b"short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");

        // No temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_atomic_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_atomic(&blocker.join("file.txt"), b"x").unwrap_err();
        assert!(matches!(err, StoreError::StorageWriteFailed { .. }));
    }

    #[test]
    fn json_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let map: BTreeMap<String, u32> = read_json_or_default(&dir.path().join("absent.json"));
        assert!(map.is_empty());
    }

    #[test]
    fn json_corrupt_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ this is not json").unwrap();

        let list: Vec<String> = read_json_or_default(&path);
        assert!(list.is_empty());
    }

    #[test]
    fn json_written_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        write_json(&path, &vec!["cat", "dog"]).unwrap();

        let list: Vec<String> = read_json_or_default(&path);
        assert_eq!(list, vec!["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn lines_skip_blanks_and_trim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.txt");
        fs::write(&path, "\ncat\n  lion  \n\n").unwrap();

        assert_eq!(
            read_lines(&path),
            Some(vec!["cat".to_string(), "lion".to_string()])
        );
        assert_eq!(read_lines(&dir.path().join("missing.txt")), None);
    }

    #[test]
    fn lines_written_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fruit.txt");
        write_lines(&path, &["apple".to_string(), "kiwi".to_string()]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "apple\nkiwi\n");
        write_lines(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
