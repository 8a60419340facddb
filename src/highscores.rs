//! Session leaderboard
//!
//! Kept in memory for the lifetime of the process only; nothing is written to
//! disk. Tracks the top 10 finished runs.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Pipes cleared
    pub score: u32,
    /// Ticks survived
    pub ticks: u64,
    /// 1-based run number within the session
    pub run: u32,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
    runs_recorded: u32,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a finished run.
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn record(&mut self, score: u32, ticks: u64) -> Option<usize> {
        self.runs_recorded += 1;
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            ticks,
            run: self.runs_recorded,
        };

        // Sorted descending by score; earlier runs win ties
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        log::debug!("Run {} placed #{} with {}", self.runs_recorded, rank, score);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Total runs recorded this session, qualifying or not
    pub fn runs(&self) -> u32 {
        self.runs_recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_scores_do_not_qualify() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(0, 40), None);
        assert!(scores.is_empty());
        assert_eq!(scores.runs(), 1);
    }

    #[test]
    fn test_sorted_descending_with_ranks() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(3, 300), Some(1));
        assert_eq!(scores.record(7, 700), Some(1));
        assert_eq!(scores.record(5, 500), Some(2));
        assert_eq!(scores.record(5, 520), Some(3));

        let order: Vec<(u32, u32)> = scores.entries.iter().map(|e| (e.score, e.run)).collect();
        assert_eq!(order, vec![(7, 2), (5, 3), (5, 4), (3, 1)]);
        assert_eq!(scores.top_score(), Some(7));
    }

    #[test]
    fn test_truncates_to_max() {
        let mut scores = HighScores::new();
        for score in 1..=15 {
            scores.record(score, score as u64 * 100);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(6));
        assert!(!scores.qualifies(6));
        assert!(scores.qualifies(7));
        assert_eq!(scores.runs(), 15);
    }
}
