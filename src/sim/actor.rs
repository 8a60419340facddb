//! The cat: a point mass falling under constant gravity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// Player-controlled cat
///
/// Only the vertical axis moves; the world scrolls past a fixed `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    /// Fixed horizontal centre
    pub x: f32,
    /// Vertical centre (y grows downward)
    pub y: f32,
    /// Vertical velocity in pixels per tick
    pub vel: f32,
    /// Side of the bounding square
    pub size: f32,
}

impl Cat {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            x,
            y,
            vel: 0.0,
            size,
        }
    }

    /// One semi-implicit Euler step: velocity first, then position
    #[inline]
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.y += self.vel;
    }

    /// Replace the current velocity with the flap impulse
    #[inline]
    pub fn flap(&mut self, impulse: f32) {
        self.vel = impulse;
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Axis-aligned bounding square
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos(), self.size)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - self.size / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.size / 2.0
    }
}
