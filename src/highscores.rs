//! Persisted high score
//!
//! A single integer stored as a decimal string under a fixed key.

use crate::persistence::KeyValueStore;

/// Best score across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "highscore";

    pub fn new() -> Self {
        Self::default()
    }

    /// Load from storage. Absent or unreadable values count as 0.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = store.get(Self::STORAGE_KEY) else {
            log::info!("No high score found, starting fresh");
            return Self::new();
        };

        match raw.trim().parse::<u64>() {
            Ok(best) => {
                log::info!("Loaded high score {best}");
                Self { best }
            }
            Err(_) => {
                log::warn!("Ignoring corrupt high score {raw:?}");
                Self::new()
            }
        }
    }

    /// Fold in a finished run's score. Returns true on a new record.
    pub fn submit(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        store.set(Self::STORAGE_KEY, &self.best.to_string());
        log::info!("High score saved ({})", self.best);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_absent_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(HighScore::load(&store).best, 0);
    }

    #[test]
    fn test_corrupt_is_zero() {
        let mut store = MemoryStore::new();
        for raw in ["", "abc", "-5", "1.5e3"] {
            store.set(HighScore::STORAGE_KEY, raw);
            assert_eq!(HighScore::load(&store).best, 0, "{raw:?}");
        }
    }

    #[test]
    fn test_round_trip_as_plain_integer() {
        let mut store = MemoryStore::new();
        let mut high = HighScore::load(&store);
        assert!(high.submit(42));
        high.save(&mut store);
        assert_eq!(store.get(HighScore::STORAGE_KEY).as_deref(), Some("42"));
        assert_eq!(HighScore::load(&store).best, 42);
    }

    #[test]
    fn test_submit_keeps_best() {
        let mut high = HighScore { best: 100 };
        assert!(!high.submit(99));
        assert!(!high.submit(100));
        assert_eq!(high.best, 100);
    }
}
