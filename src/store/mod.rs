// Persistence boundary for assignment and template files

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Text storage used by `persist`/`load`.
/// `read_text` returns `Ok(None)` when nothing is stored at `path`.
pub trait TextStore {
    fn read_text(&self, path: &Path) -> io::Result<Option<String>>;
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Filesystem-backed store
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl TextStore for FsStore {
    fn read_text(&self, path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Writes to a sibling temp file then renames it over the target,
    /// so the previous contents survive a failed write.
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = temp_path_for(path);
        let result = (|| {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, path)
        })();

        match result {
            Ok(()) => log::debug!("Wrote {} bytes to {}", contents.len(), path.display()),
            Err(_) => {
                let _ = fs::remove_file(&temp_path);
            }
        }
        result
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// In-memory store for tests and embedders that keep state elsewhere
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files
            .lock()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }
}

fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "memory store lock poisoned")
}

impl TextStore for MemoryStore {
    fn read_text(&self, path: &Path) -> io::Result<Option<String>> {
        let files = self.files.lock().map_err(|_| poisoned())?;
        Ok(files.get(path).cloned())
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut files = self.files.lock().map_err(|_| poisoned())?;
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_missing_file_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(FsStore.read_text(&tmp.path().join("missing.json")).unwrap().is_none());
    }

    #[test]
    fn test_fs_write_creates_parent_and_replaces() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("device_assignments.json");

        FsStore.write_text(&path, "{}").unwrap();
        assert_eq!(FsStore.read_text(&path).unwrap().as_deref(), Some("{}"));

        FsStore.write_text(&path, "{\"a\": 1}").unwrap();
        assert_eq!(FsStore.read_text(&path).unwrap().as_deref(), Some("{\"a\": 1}"));
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_fs_write_into_file_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        // Parent is a regular file, so directory creation must fail
        assert!(FsStore.write_text(&blocker.join("a.json"), "{}").is_err());
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        let path = Path::new("a.json");
        assert!(!store.contains(path));
        store.write_text(path, "{}").unwrap();
        assert!(store.contains(path));
        assert_eq!(store.read_text(path).unwrap().as_deref(), Some("{}"));
    }
}
