//! High score registry
//!
//! A single best score, persisted across sessions. The simulation reads it
//! and writes it only at game over, and only when the run beat it.

/// Where the best score lives
pub trait HighScoreStore {
    fn high_score(&self) -> u64;
    fn set_high_score(&mut self, score: u64);
}

/// In-memory store (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    score: u64,
    /// Number of `set_high_score` calls
    pub writes: u32,
}

impl MemoryStore {
    pub fn new(score: u64) -> Self {
        Self { score, writes: 0 }
    }
}

impl HighScoreStore for MemoryStore {
    fn high_score(&self) -> u64 {
        self.score
    }

    fn set_high_score(&mut self, score: u64) {
        self.score = score;
        self.writes += 1;
    }
}

/// Record a finished run. Returns true if it set a new high score.
pub fn record_final_score(store: &mut dyn HighScoreStore, score: u64) -> bool {
    if score > store.high_score() {
        store.set_high_score(score);
        log::info!("New high score: {}", score);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_higher_scores_are_written() {
        let mut store = MemoryStore::new(100);
        assert!(!record_final_score(&mut store, 100));
        assert!(!record_final_score(&mut store, 0));
        assert_eq!(store.writes, 0);

        assert!(record_final_score(&mut store, 150));
        assert_eq!(store.high_score(), 150);
        assert_eq!(store.writes, 1);
    }
}
