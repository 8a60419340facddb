//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Callers run it
//! at a fixed rate (60 Hz); there is no delta-time.

use super::state::{CrashCause, GameEvent, GamePhase, GameState};

/// Advance the game state by one fixed step.
///
/// Does nothing unless the run is in progress.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Physics
    state.cat.integrate(state.config.gravity);

    // Scroll pipes, then score any the cat has cleared
    state.pipes.advance(state.scores.speed as f32);
    for _ in 0..state.pipes.score_crossings(state.cat.x) {
        state.scores.on_score_increment();
        state.record(GameEvent::Scored {
            score: state.scores.score,
        });
    }

    if let Some(x) = state.pipes.recycle_if_needed(&mut state.rng) {
        log::debug!("Pipe recycled, new pipe at x={}", x);
        state.record(GameEvent::Recycled { x });
    }

    if state.scores.tick_difficulty(state.time_ticks) {
        log::debug!(
            "Speed up to {} at tick {}",
            state.scores.speed,
            state.time_ticks
        );
        state.record(GameEvent::SpeedUp {
            speed: state.scores.speed,
        });
    }

    if state.pipes.collides_with(&state.cat.bounds()) {
        state.end_run(CrashCause::Pipe);
    }

    // Ceiling is soft, ground is fatal
    if state.cat.top() < 0.0 {
        state.cat.y = state.cat.size / 2.0;
        state.cat.vel = 0.0;
        state.record(GameEvent::HitCeiling);
    }
    let ground_y = state.config.ground_y();
    if state.cat.bottom() > ground_y {
        state.cat.y = ground_y - state.cat.size / 2.0;
        state.end_run(CrashCause::Ground);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::MAX_PENDING_EVENTS;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(GameConfig::default(), seed).unwrap();
        state.flap();
        state.take_events();
        state
    }

    #[test]
    fn test_tick_is_noop_unless_running() {
        let mut state = GameState::new(GameConfig::default(), 12345).unwrap();
        let before = state.snapshot();
        tick(&mut state);
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.phase(), GamePhase::Idle);

        let mut state = running_state(12345);
        state.end_run(CrashCause::Pipe);
        let before = state.snapshot();
        for _ in 0..10 {
            tick(&mut state);
        }
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_first_tick_after_flap() {
        let mut state = running_state(1);
        tick(&mut state);
        assert_eq!(state.time_ticks(), 1);
        assert!((state.cat().vel - -8.45).abs() < 1e-5);
        assert!((state.cat().y - (320.0 - 8.45)).abs() < 1e-4);
        assert_eq!(state.phase(), GamePhase::Running);
        let xs: Vec<f32> = state.pipes().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![476.0, 676.0, 876.0]);
    }

    #[test]
    fn test_cat_inside_top_block_ends_run_that_tick() {
        let mut state = running_state(2);
        {
            let pipe = &mut state.pipes.pipes_mut()[0];
            pipe.x = 100.0;
            pipe.gap_top = 450.0;
        }
        tick(&mut state);
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.time_ticks(), 1);
        assert!(state.take_events().contains(&GameEvent::Crashed {
            cause: CrashCause::Pipe
        }));
    }

    #[test]
    fn test_falling_cat_hits_ground() {
        let mut state = GameState::new(GameConfig::default(), 3).unwrap();
        state.flap();
        state.cat.vel = 0.0;

        let mut ticks = 0;
        while state.phase() == GamePhase::Running && ticks < 200 {
            tick(&mut state);
            ticks += 1;
        }
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.cat().bottom(), 592.0);
        assert!(state.take_events().contains(&GameEvent::Crashed {
            cause: CrashCause::Ground
        }));
    }

    #[test]
    fn test_ceiling_clamps_without_ending_run() {
        let mut state = running_state(4);
        state.cat.y = 10.0;
        state.cat.vel = -5.0;
        tick(&mut state);
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.cat().y, 18.0);
        assert_eq!(state.cat().vel, 0.0);
        assert!(state.take_events().contains(&GameEvent::HitCeiling));
    }

    #[test]
    fn test_clearing_a_pipe_scores_once() {
        let mut state = running_state(5);
        state.cat.vel = 0.0;
        {
            let pipe = &mut state.pipes.pipes_mut()[0];
            // Trailing edge at 121, just ahead of the cat at 120
            pipe.x = 41.0;
            pipe.gap_top = 250.0;
        }
        tick(&mut state);
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.score(), 1);
        assert_eq!(state.high_score(), 1);
        assert_eq!(
            state.take_events(),
            vec![GameEvent::Scored { score: 1 }]
        );

        state.cat.vel = 0.0;
        tick(&mut state);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_recycle_during_tick() {
        let mut state = running_state(6);
        state.cat.vel = 0.0;
        state.pipes.pipes_mut()[0].x = -78.0;
        let last_x = state.pipes()[2].x - 4.0;
        tick(&mut state);
        assert_eq!(state.pipes().len(), 3);
        assert_eq!(state.pipes()[2].x, last_x + 200.0);
        assert!(state.take_events().contains(&GameEvent::Recycled { x: last_x + 200.0 }));
    }

    #[test]
    fn test_speed_ramps_every_thousand_ticks() {
        let mut state = running_state(7);
        state.time_ticks = 999;
        state.cat.vel = 0.0;
        tick(&mut state);
        assert_eq!(state.speed(), 5);
        assert!(state.take_events().contains(&GameEvent::SpeedUp { speed: 5 }));
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = running_state(8);
        state.scores.on_score_increment();
        state.cat.vel = 0.0;
        state.cat.y = 580.0;
        tick(&mut state);
        assert_eq!(state.phase(), GamePhase::GameOver);

        state.flap();
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.high_score(), 1);
        assert_eq!(state.cat().vel, 0.0);
        assert_eq!(state.time_ticks(), 0);

        tick(&mut state);
        assert!((state.cat().vel - 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_undrained_events_stay_bounded() {
        let mut state = running_state(10);
        for t in 0..200_000u32 {
            if state.phase() == GamePhase::GameOver || t % 15 == 0 {
                state.flap();
            }
            tick(&mut state);
            assert!(state.events.len() <= MAX_PENDING_EVENTS);
        }
        assert_eq!(state.events.len(), MAX_PENDING_EVENTS);

        // Newest events survive, oldest were dropped
        state.flap();
        let events = state.take_events();
        assert_eq!(events.len(), MAX_PENDING_EVENTS);
        assert!(matches!(
            events.last(),
            Some(GameEvent::Flapped | GameEvent::Restarted)
        ));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = running_state(99999);
        let mut state2 = running_state(99999);

        for t in 0..600 {
            if t % 18 == 0 {
                state1.flap();
                state2.flap();
            }
            tick(&mut state1);
            tick(&mut state2);
        }

        assert_eq!(state1.snapshot(), state2.snapshot());
        assert_eq!(state1.take_events(), state2.take_events());
    }
}
