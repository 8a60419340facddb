//! Idle/demo mode - an AI player for attract screens and headless runs
//!
//! Plays through the normal input path: it only ever produces clicks.

use super::input::{InputEvent, MouseButton};
use crate::sim::{GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Clearance kept above the lower lip of the gap
    pub margin: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { margin: 12.0 }
    }
}

impl Autopilot {
    /// Height the cat should not sink below right now
    pub fn target_y(&self, state: &GameState) -> f32 {
        let cat = state.cat();
        let cat_left = cat.x - cat.size / 2.0;
        match state.pipe_field().next_ahead_of(cat_left) {
            Some(pipe) => pipe.gap_bottom() - cat.size / 2.0 - self.margin,
            None => state.config().ground_y() / 2.0,
        }
    }

    /// Decide whether to click this tick. Never restarts a finished run.
    pub fn poll(&self, state: &GameState) -> Option<InputEvent> {
        let wants_flap = match state.phase() {
            GamePhase::Idle => true,
            GamePhase::Running => {
                let cat = state.cat();
                cat.vel >= 0.0 && cat.y > self.target_y(state)
            }
            GamePhase::GameOver => false,
        };
        wants_flap.then_some(InputEvent::Click {
            button: MouseButton::Left,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::platform::InputAdapter;
    use crate::sim::tick;

    #[test]
    fn test_starts_idle_game() {
        let state = GameState::new(GameConfig::default(), 1).unwrap();
        assert!(Autopilot::default().poll(&state).is_some());
    }

    #[test]
    fn test_flaps_only_when_sinking_below_target() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        state.flap();
        let pilot = Autopilot::default();
        let target = pilot.target_y(&state);

        state.cat.vel = 1.0;
        state.cat.y = target + 5.0;
        assert!(pilot.poll(&state).is_some());

        state.cat.y = target - 5.0;
        assert!(pilot.poll(&state).is_none());

        state.cat.y = target + 5.0;
        state.cat.vel = -3.0;
        assert!(pilot.poll(&state).is_none());
    }

    #[test]
    fn test_does_not_restart() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        state.flap();
        while state.phase() == GamePhase::Running {
            tick(&mut state);
        }
        assert!(Autopilot::default().poll(&state).is_none());
    }

    #[test]
    fn test_plays_through_input_adapter() {
        let mut state = GameState::new(GameConfig::default(), 21).unwrap();
        let pilot = Autopilot::default();
        let adapter = InputAdapter::default();

        for _ in 0..300 {
            if let Some(event) = pilot.poll(&state) {
                adapter.handle(&mut state, &event);
            }
            tick(&mut state);
        }
        // Kept off the ground long enough to reach the first pipe
        assert!(state.time_ticks() > 60);
    }
}
