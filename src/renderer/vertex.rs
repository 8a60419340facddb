//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex list, ready for a GPU vertex buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const SKY: [f32; 4] = rgb(120, 200, 255);
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 200.0 / 255.0];
    pub const PIPE: [f32; 4] = rgb(80, 180, 90);
    pub const PIPE_RIM: [f32; 4] = rgb(60, 150, 70);
    pub const GROUND: [f32; 4] = rgb(60, 180, 75);
    pub const DIRT: [f32; 4] = rgb(150, 100, 60);
    pub const CAT_BODY: [f32; 4] = rgb(255, 200, 120);
    pub const CAT_EARS: [f32; 4] = rgb(200, 140, 80);
    pub const CAT_NOSE: [f32; 4] = rgb(180, 80, 120);
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Dim panel behind the Game Over text
    pub const OVERLAY_DARK: [f32; 4] = [0.0, 0.0, 0.0, 190.0 / 255.0];
    /// Lighter panel behind the start prompt
    pub const OVERLAY_LIGHT: [f32; 4] = [0.0, 0.0, 0.0, 120.0 / 255.0];
}
