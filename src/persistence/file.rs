//! Directory-backed store for native builds

use std::fs;
use std::path::PathBuf;

use super::KeyValueStore;

/// Stores each key as `<dir>/<key>.txt`
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.txt"))
    }

    fn write(&self, key: &str, value: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Could not read {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.write(key, value) {
            log::warn!("Could not save '{key}' to {}: {e}", self.dir.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_is_absent() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert_eq!(store.get("highscore"), None);
    }

    #[test]
    fn test_set_creates_dir_and_persists() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("emoji-dash");
        let mut store = FileStore::new(&dir);
        store.set("highscore", "42");

        // A second handle on the same directory sees the value
        let reopened = FileStore::new(&dir);
        assert_eq!(reopened.get("highscore").as_deref(), Some("42"));
        assert!(!dir.join("highscore.tmp").exists());
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.set("highscore", "7");
        store.set("highscore", "1200");
        assert_eq!(store.get("highscore").as_deref(), Some("1200"));
    }

    #[test]
    fn test_key_is_sanitized() {
        let store = FileStore::new("/tmp/x");
        assert_eq!(store.path_for("../evil"), PathBuf::from("/tmp/x/___evil.txt"));
    }
}
