//! Key-value persistence
//!
//! The game stores plain strings under fixed keys (only the high score
//! integer today). Backends:
//! - `MemoryStore`: in-process map, used by tests
//! - `FileStore`: one file per key in a directory (native)
//! - `platform::web::LocalStorage`: browser localStorage (wasm32)
//!
//! Backends never fail loudly: read problems look like an absent key and
//! write problems are logged.

mod file;

pub use file::FileStore;

use std::collections::HashMap;

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("highscore"), None);
        store.set("highscore", "12");
        store.set("highscore", "42");
        assert_eq!(store.get("highscore").as_deref(), Some("42"));
    }
}
