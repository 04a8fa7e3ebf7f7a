//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Linear RGBA
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const CLEAR: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: Color = [0.09, 0.11, 0.16, 1.0];
    pub const HITBOX: Color = [0.0, 1.0, 0.0, 1.0];
    pub const PADDLE: Color = [0.55, 0.57, 0.62, 1.0];
    pub const BALL: Color = [0.93, 0.35, 0.22, 1.0];
    pub const BALL_MARK: Color = [1.0, 0.85, 0.6, 1.0];
    pub const CHEST: Color = [0.62, 0.4, 0.18, 1.0];
    pub const COIN: Color = [1.0, 0.82, 0.2, 1.0];
}
