//! Axis-aligned rectangle overlap
//!
//! Everything in Flappy Cat collides as a box: the cat's bounding square
//! against the solid columns above and below each pipe gap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` centred on `center`
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// A rectangle with no area covers nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let flat = Rect::new(2.0, 2.0, 5.0, 0.0);
        assert!(flat.is_empty());
        assert!(!a.intersects(&flat));
        assert!(!flat.intersects(&a));
    }

    #[test]
    fn test_centered() {
        let r = Rect::centered(Vec2::new(120.0, 320.0), 36.0);
        assert_eq!(r, Rect::new(102.0, 302.0, 36.0, 36.0));
        assert_eq!(r.right(), 138.0);
        assert_eq!(r.bottom(), 338.0);
    }
}
