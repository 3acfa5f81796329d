//! Locked, atomic file replacement shared by the stores and the config file

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use super::StorageError;

/// Write `content` to `path` by way of a temp file and rename.
///
/// A sibling `<name>.lock` file is held exclusively for the duration, so a
/// second process writing the same file waits instead of interleaving.
/// Parent directories are created as needed.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }

    let lock_path = sibling(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .map_err(|e| StorageError::io(&lock_path, e))?;

    lock_file
        .lock_exclusive()
        .map_err(|e| StorageError::io(&lock_path, e))?;

    let temp_path = sibling(path, "tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| StorageError::io(&temp_path, e))?;

    temp_file
        .write_all(content)
        .and_then(|_| temp_file.sync_all())
        .map_err(|e| StorageError::io(&temp_path, e))?;

    std::fs::rename(&temp_path, path).map_err(|e| StorageError::io(path, e))?;

    // Lock is released when lock_file is dropped
    Ok(())
}

/// `settings.toml` -> `settings.toml.<suffix>`
fn sibling(path: &Path, suffix: &str) -> std::path::PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parents_and_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data.json");

        write_atomic(&path, b"first").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");

        write_atomic(&path, b"second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert!(!dir.path().join("nested").join("data.json.tmp").exists());
    }

    #[test]
    fn test_sibling_name() {
        let p = Path::new("/tmp/x/settings.toml");
        assert_eq!(sibling(p, "lock"), Path::new("/tmp/x/settings.toml.lock"));
    }
}
