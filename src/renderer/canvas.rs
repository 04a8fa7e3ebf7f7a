//! Draw-call surface the host supplies
//!
//! Mirrors the small set of drawing primitives the game needs. Coordinates are
//! display units, origin top-left, y down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vertex::Color;

/// Sprite artwork per entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Ball,
    Paddle,
    Chest,
    Coin,
}

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    #[default]
    Centre,
    Right,
}

/// A drawing buffer for one frame
pub trait Canvas {
    /// Start a frame by filling the buffer with a color
    fn clear(&mut self, color: Color);
    fn draw_background(&mut self);
    /// Draw a sprite centered on `pos`, rotated by `rotation` radians
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, rotation: f32);
    /// Outline the rectangle spanned by two corners
    fn draw_rect(&mut self, min: Vec2, max: Vec2, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign);
    /// Finish the frame
    fn present(&mut self);
}
