//! Fixed-rate tick scheduling
//!
//! Hosts get variable frame times; the simulation wants a fixed number of
//! ticks. The accumulator converts one into the other.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame time accepted before clamping (seconds)
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Feed one frame's elapsed time; returns how many ticks to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        substeps
    }

    /// Fraction of a tick left in the accumulator, for interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}
