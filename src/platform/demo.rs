//! Headless demo session
//!
//! Plays autopilot runs through the same input and fixed-step path a windowed
//! host would use, recording each finished run on the session leaderboard.

use crate::config::{ConfigError, GameConfig};
use crate::consts::TICKS_PER_SECOND;
use crate::highscores::HighScores;
use crate::renderer::build_frame;
use crate::sim::{GameEvent, GamePhase, GameState, tick};

use super::{Autopilot, FixedTimestep, InputAdapter, InputEvent, MouseButton};

/// Runs played by the headless binary unless told otherwise
pub const DEMO_RUNS: u32 = 5;
/// Simulated host frame time (a 30 Hz display)
pub const FRAME_DT: f32 = 1.0 / 30.0;
/// Give up on a run after two minutes of game time
pub const MAX_RUN_TICKS: u64 = 2 * 60 * TICKS_PER_SECOND as u64;

/// Outcome of a demo session
#[derive(Debug)]
pub struct DemoReport {
    pub leaderboard: HighScores,
    /// World as it stood when the session stopped
    pub state: GameState,
    /// Host frames presented
    pub frames: u64,
    pub vertices_drawn: usize,
    /// The last run hit `MAX_RUN_TICKS` instead of crashing
    pub timed_out: bool,
}

/// Play up to `runs` autopilot runs.
///
/// Stops early if a run outlasts `MAX_RUN_TICKS`, since the autopilot might
/// never lose it.
pub fn play(config: GameConfig, seed: u64, runs: u32) -> Result<DemoReport, ConfigError> {
    let mut state = GameState::new(config, seed)?;
    log::info!("Game initialized with seed: {}", seed);

    let adapter = InputAdapter::default();
    let pilot = Autopilot::default();
    let mut clock = FixedTimestep::default();
    let mut leaderboard = HighScores::new();
    let mut frames = 0u64;
    let mut vertices_drawn = 0usize;
    let mut timed_out = false;

    let mut finished = runs == 0;
    while !finished {
        for _ in 0..clock.advance(FRAME_DT) {
            if let Some(event) = pilot.poll(&state) {
                adapter.handle(&mut state, &event);
            }
            tick(&mut state);

            for event in state.take_events() {
                match event {
                    GameEvent::Scored { score } => log::debug!("Score {}", score),
                    GameEvent::SpeedUp { speed } => log::info!("Speed now {}", speed),
                    _ => {}
                }
            }

            timed_out = state.time_ticks() >= MAX_RUN_TICKS;
            if state.phase() != GamePhase::GameOver && !timed_out {
                continue;
            }
            if timed_out {
                log::info!("Run timed out at score {}", state.score());
            }
            let rank = leaderboard.record(state.score(), state.time_ticks());
            log::info!(
                "Run {} finished: score {} in {} ticks (rank {:?})",
                leaderboard.runs(),
                state.score(),
                state.time_ticks(),
                rank
            );

            finished = timed_out || leaderboard.runs() >= runs;
            if finished {
                break;
            }
            // Restart goes through the same click a player would make
            adapter.handle(&mut state, &InputEvent::Click { button: MouseButton::Left });
        }
        frames += 1;
        vertices_drawn += build_frame(&state).vertices.len();
    }

    log::debug!("Built {} vertices over {} frames", vertices_drawn, frames);

    Ok(DemoReport {
        leaderboard,
        state,
        frames,
        vertices_drawn,
        timed_out,
    })
}
