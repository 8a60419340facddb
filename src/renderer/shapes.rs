//! Shape generation for 2D primitives
//!
//! Every shape is emitted as a triangle list in playfield coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect`
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    if rect.is_empty() {
        return Vec::new();
    }
    let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled ellipse inscribed in `bounds`
pub fn ellipse(bounds: &Rect, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let center = Vec2::new(bounds.x + bounds.w / 2.0, bounds.y + bounds.h / 2.0);
    let radii = Vec2::new(bounds.w / 2.0, bounds.h / 2.0);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// A single filled triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Line segment of the given stroke width, as a quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}
