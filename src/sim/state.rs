//! Game state and core simulation types
//!
//! One owned `GameState` holds the whole world. Hosts mutate it only through
//! `flap()` and `tick()` and read it through the accessors below.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Cat;
use super::pipes::{Pipe, PipeField};
use super::score::ScoreTracker;
use crate::config::{ConfigError, GameConfig};

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 64;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// World is laid out, waiting for the first flap
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; the next flap restarts
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Pipe,
    Ground,
}

/// Things that happened since the host last drained events
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First flap left Idle
    Started,
    Flapped,
    Scored { score: u32 },
    SpeedUp { speed: u32 },
    /// A pipe left the screen and a new one spawned at `x`
    Recycled { x: f32 },
    HitCeiling,
    Crashed { cause: CrashCause },
    /// Flap during GameOver reset the world
    Restarted,
}

/// Read-only copy of everything a renderer or HUD needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub cat: Cat,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub high_score: u32,
    pub speed: u32,
    pub time_ticks: u64,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) phase: GamePhase,
    pub(crate) cat: Cat,
    pub(crate) pipes: PipeField,
    pub(crate) scores: ScoreTracker,
    /// Ticks simulated in the current run
    pub(crate) time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game with gap offsets drawn from `seed`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    /// Create a new game drawing gap offsets from a supplied generator
    pub fn with_rng(config: GameConfig, rng: Pcg32) -> Result<Self, ConfigError> {
        config.validate()?;

        let cat = Cat::new(config.cat_x(), config.cat_start_y(), config.cat_size);
        let pipes = PipeField::new(&config);
        let scores = ScoreTracker::new(config.base_speed, config.max_speed, config.speed_up_interval);
        let mut state = Self {
            config,
            phase: GamePhase::Idle,
            cat,
            pipes,
            scores,
            time_ticks: 0,
            events: Vec::new(),
            rng,
        };
        state.reset_world();
        Ok(state)
    }

    /// Put the cat, pipes, score and tick counter back to their start values
    fn reset_world(&mut self) {
        self.cat = Cat::new(self.config.cat_x(), self.config.cat_start_y(), self.config.cat_size);
        self.pipes
            .populate(self.config.width, self.config.pipe_count, &mut self.rng);
        self.scores.reset();
        self.time_ticks = 0;
    }

    /// The single player command.
    ///
    /// Idle: starts the run with a flap. Running: flaps. GameOver: resets the
    /// world and starts a new run at rest; the input is spent on the restart.
    pub fn flap(&mut self) {
        match self.phase {
            GamePhase::Idle => {
                self.phase = GamePhase::Running;
                self.cat.flap(self.config.flap_impulse);
                self.record(GameEvent::Started);
                self.record(GameEvent::Flapped);
                log::info!("Run started");
            }
            GamePhase::Running => {
                self.cat.flap(self.config.flap_impulse);
                self.record(GameEvent::Flapped);
            }
            GamePhase::GameOver => {
                self.reset_world();
                self.phase = GamePhase::Running;
                self.record(GameEvent::Restarted);
                log::info!("Run restarted (high score {})", self.scores.high_score);
            }
        }
    }

    /// End the current run (no-op if it already ended this tick)
    pub(crate) fn end_run(&mut self, cause: CrashCause) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.record(GameEvent::Crashed { cause });
        log::info!(
            "Game over ({:?}) after {} ticks: score {}, high score {}",
            cause,
            self.time_ticks,
            self.scores.score,
            self.scores.high_score
        );
    }

    /// Queue an event, dropping the oldest once the host falls behind
    pub(crate) fn record(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Take all events recorded since the last call.
    ///
    /// At most `MAX_PENDING_EVENTS` are held between drains.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn cat(&self) -> &Cat {
        &self.cat
    }

    pub fn pipes(&self) -> &[Pipe] {
        self.pipes.pipes()
    }

    pub fn pipe_field(&self) -> &PipeField {
        &self.pipes
    }

    pub fn score(&self) -> u32 {
        self.scores.score
    }

    pub fn high_score(&self) -> u32 {
        self.scores.high_score
    }

    pub fn speed(&self) -> u32 {
        self.scores.speed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            cat: self.cat,
            pipes: self.pipes.pipes().to_vec(),
            score: self.scores.score,
            high_score: self.scores.high_score,
            speed: self.scores.speed,
            time_ticks: self.time_ticks,
        }
    }
}
