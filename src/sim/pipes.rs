//! Pipes and the sliding window that scrolls them past the cat
//!
//! The field is a plain `Vec` kept in ascending `x`: pipes only ever move left
//! at a uniform speed and new ones are only appended on the right, so
//! insertion order is spatial order.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;

/// A pipe pair: a solid column above the gap and another below it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Leading (left) edge
    pub x: f32,
    /// Y coordinate where the gap starts
    pub gap_top: f32,
    pub width: f32,
    pub gap_height: f32,
    /// Set once the cat has cleared this pipe
    pub passed: bool,
}

impl Pipe {
    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_height
    }

    /// Solid column from the top of the playfield down to the gap
    pub fn top_block(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top)
    }

    /// Solid column from the gap down to the bottom of the playfield
    pub fn bottom_block(&self, playfield_height: f32) -> Rect {
        let y = self.gap_bottom();
        Rect::new(self.x, y, self.width, playfield_height - y)
    }

    /// Whether `bounds` overlaps either solid column
    pub fn collides_with(&self, bounds: &Rect, playfield_height: f32) -> bool {
        bounds.intersects(&self.top_block()) || bounds.intersects(&self.bottom_block(playfield_height))
    }
}

/// Ordered window of pipes with spawning and recycling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeField {
    pipes: Vec<Pipe>,
    pipe_width: f32,
    gap_height: f32,
    spacing: f32,
    gap_top_min: f32,
    gap_top_max: f32,
    playfield_height: f32,
}

impl PipeField {
    /// Empty field using the pipe geometry from `config`
    pub fn new(config: &GameConfig) -> Self {
        let (gap_top_min, gap_top_max) = config.gap_top_range();
        Self {
            pipes: Vec::with_capacity(config.pipe_count),
            pipe_width: config.pipe_width,
            gap_height: config.gap_height,
            spacing: config.pipe_spacing,
            gap_top_min,
            gap_top_max,
            playfield_height: config.height,
        }
    }

    /// Clear the field and lay out `count` evenly spaced pipes from `start_x`
    pub fn populate<R: Rng>(&mut self, start_x: f32, count: usize, rng: &mut R) {
        self.pipes.clear();
        for i in 0..count {
            self.spawn(start_x + i as f32 * self.spacing, rng);
        }
    }

    /// Append one pipe at `x` with a randomized gap
    pub fn spawn<R: Rng>(&mut self, x: f32, rng: &mut R) {
        let gap_top = rng.random_range(self.gap_top_min..=self.gap_top_max);
        self.pipes.push(Pipe {
            x,
            gap_top,
            width: self.pipe_width,
            gap_height: self.gap_height,
            passed: false,
        });
    }

    /// Scroll every pipe left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for pipe in &mut self.pipes {
            pipe.x -= speed;
        }
    }

    /// Mark pipes whose trailing edge is now left of `cat_x` as passed.
    ///
    /// Returns how many pipes were newly passed; a pipe is only counted once.
    pub fn score_crossings(&mut self, cat_x: f32) -> u32 {
        let mut crossed = 0;
        for pipe in &mut self.pipes {
            if !pipe.passed && pipe.right() < cat_x {
                pipe.passed = true;
                crossed += 1;
            }
        }
        crossed
    }

    /// Replace the leftmost pipe once it has fully left the screen.
    ///
    /// At most one pipe is recycled per call. Returns the x of the new pipe.
    pub fn recycle_if_needed<R: Rng>(&mut self, rng: &mut R) -> Option<f32> {
        let first = self.pipes.first()?;
        if first.right() >= 0.0 {
            return None;
        }
        let new_x = self.pipes.last()?.x + self.spacing;
        self.pipes.remove(0);
        self.spawn(new_x, rng);
        Some(new_x)
    }

    /// Whether `bounds` overlaps any pipe's solid columns
    pub fn collides_with(&self, bounds: &Rect) -> bool {
        let mut hit = false;
        for pipe in &self.pipes {
            hit |= pipe.collides_with(bounds, self.playfield_height);
        }
        hit
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// First pipe whose trailing edge is still at or ahead of `x`
    pub fn next_ahead_of(&self, x: f32) -> Option<&Pipe> {
        self.pipes.iter().find(|p| p.right() >= x)
    }

    #[cfg(test)]
    pub(crate) fn pipes_mut(&mut self) -> &mut Vec<Pipe> {
        &mut self.pipes
    }
}
