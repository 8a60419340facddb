//! Flappy Cat - a one-button arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, scoring)
//! - `config`: Game geometry and tuning, validated at startup
//! - `renderer`: CPU-side draw list for whatever backend presents the game
//! - `platform`: Input adapter, fixed-step clock and demo autopilot
//! - `highscores`: In-memory session leaderboard

pub mod config;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Simulation rate the game is tuned for
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;
    /// Height of the ground strip at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 48.0;

    /// Cat defaults
    pub const CAT_SIZE: f32 = 36.0;
    /// Downward acceleration per tick²
    pub const GRAVITY: f32 = 0.55;
    /// Velocity set by a flap (negative = up)
    pub const FLAP_IMPULSE: f32 = -9.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_GAP_HEIGHT: f32 = 160.0;
    pub const PIPE_SPACING: f32 = 200.0;
    pub const PIPE_COUNT: usize = 3;
    /// Lowest allowed gap top (keeps a column above every gap)
    pub const GAP_MARGIN_TOP: f32 = 120.0;
    /// Minimum clearance between a gap bottom and the ground
    pub const GAP_MARGIN_BOTTOM: f32 = 40.0;

    /// Scroll speed in pixels per tick
    pub const BASE_SPEED: u32 = 4;
    pub const MAX_SPEED: u32 = 9;
    /// Ticks between speed increases
    pub const SPEED_UP_INTERVAL: u64 = 1000;
}
