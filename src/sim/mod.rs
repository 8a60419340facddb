//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pipes by x)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod pipes;
pub mod score;
pub mod state;
pub mod tick;

pub use actor::Cat;
pub use collision::Rect;
pub use pipes::{Pipe, PipeField};
pub use score::ScoreTracker;
pub use state::{CrashCause, GameEvent, GamePhase, GameState, Snapshot};
pub use tick::tick;
