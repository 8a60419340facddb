//! Score, session high score and the speed ramp

use serde::{Deserialize, Serialize};

/// Scoring and difficulty for the current run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    pub score: u32,
    /// Best score this session; survives `reset`
    pub high_score: u32,
    /// Pipe scroll speed in pixels per tick
    pub speed: u32,
    base_speed: u32,
    max_speed: u32,
    speed_up_interval: u64,
}

impl ScoreTracker {
    pub fn new(base_speed: u32, max_speed: u32, speed_up_interval: u64) -> Self {
        Self {
            score: 0,
            high_score: 0,
            speed: base_speed,
            base_speed,
            max_speed,
            speed_up_interval,
        }
    }

    /// Count one cleared pipe
    pub fn on_score_increment(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Bump the speed on every `speed_up_interval`-th tick, up to the cap.
    ///
    /// Returns true if the speed changed.
    pub fn tick_difficulty(&mut self, tick_count: u64) -> bool {
        if tick_count.is_multiple_of(self.speed_up_interval) && self.speed < self.max_speed {
            self.speed += 1;
            return true;
        }
        false
    }

    /// Start a new run; the high score is kept
    pub fn reset(&mut self) {
        self.score = 0;
        self.speed = self.base_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_score_raises_high_score() {
        let mut tracker = ScoreTracker::new(4, 9, 1000);
        tracker.on_score_increment();
        tracker.on_score_increment();
        assert_eq!(tracker.score, 2);
        assert_eq!(tracker.high_score, 2);

        tracker.reset();
        assert_eq!(tracker.score, 0);
        assert_eq!(tracker.high_score, 2);

        tracker.on_score_increment();
        assert_eq!(tracker.high_score, 2);
    }

    #[test]
    fn test_speed_ramp_is_capped() {
        let mut tracker = ScoreTracker::new(4, 9, 1000);
        assert!(!tracker.tick_difficulty(999));
        assert!(tracker.tick_difficulty(1000));
        assert_eq!(tracker.speed, 5);
        assert!(!tracker.tick_difficulty(1500));

        for t in 2..=10 {
            tracker.tick_difficulty(t * 1000);
        }
        assert_eq!(tracker.speed, 9);
        assert!(!tracker.tick_difficulty(11_000));
        assert_eq!(tracker.speed, 9);

        tracker.reset();
        assert_eq!(tracker.speed, 4);
    }

    proptest! {
        #[test]
        fn prop_high_score_never_decreases(runs in proptest::collection::vec(0u32..50, 1..20)) {
            let mut tracker = ScoreTracker::new(4, 9, 1000);
            let mut previous_high = 0;
            for pipes in runs {
                tracker.reset();
                for _ in 0..pipes {
                    tracker.on_score_increment();
                    prop_assert!(tracker.high_score >= previous_high);
                    prop_assert!(tracker.high_score >= tracker.score);
                    previous_high = tracker.high_score;
                }
            }
        }
    }
}
