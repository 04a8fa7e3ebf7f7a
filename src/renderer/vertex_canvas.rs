//! `Canvas` that tessellates draw calls into triangles
//!
//! Sprites are drawn as flat shapes sized from the tuning. Text cannot be
//! tessellated here; it is collected as labels for the host to overlay.
//! Vertices are `Pod`, so a frame uploads straight into a vertex buffer.

use glam::Vec2;

use super::canvas::{Canvas, Sprite, TextAlign};
use super::shapes;
use super::vertex::{Color, Vertex, colors};
use crate::tuning::Tuning;

const CIRCLE_SEGMENTS: u32 = 24;
const OUTLINE_THICKNESS: f32 = 2.0;

/// Map display coordinates (origin top-left, y down) to normalized device
/// coordinates (origin centre, y up)
pub fn display_to_ndc(p: Vec2, display: Vec2) -> Vec2 {
    Vec2::new(p.x / display.x * 2.0 - 1.0, 1.0 - p.y / display.y * 2.0)
}

/// Text to be drawn by the host on top of the triangles
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub align: TextAlign,
}

/// Everything drawn between `clear` and `present`
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl Frame {
    /// Raw vertex data for a GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Half-size of each sprite's artwork
#[derive(Debug, Clone, Copy)]
struct SpriteSizes {
    ball: Vec2,
    paddle: Vec2,
    chest: Vec2,
    coin: Vec2,
}

impl SpriteSizes {
    fn half_extent(&self, sprite: Sprite) -> Vec2 {
        match sprite {
            Sprite::Ball => self.ball,
            Sprite::Paddle => self.paddle,
            Sprite::Chest => self.chest,
            Sprite::Coin => self.coin,
        }
    }
}

pub struct VertexCanvas {
    display: Vec2,
    sprites: SpriteSizes,
    building: Frame,
    presented: Frame,
    frames_presented: u64,
}

impl VertexCanvas {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            display: tuning.display,
            sprites: SpriteSizes {
                ball: tuning.ball.half_extent,
                paddle: tuning.paddle.half_extent,
                chest: Vec2::splat(tuning.chests.size / 2.0),
                coin: tuning.coin.half_extent * 0.5,
            },
            building: Frame::default(),
            presented: Frame::default(),
            frames_presented: 0,
        }
    }

    /// The last presented frame
    pub fn frame(&self) -> &Frame {
        &self.presented
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// The last presented frame with vertices in device coordinates
    pub fn ndc_frame(&self) -> Frame {
        let vertices = self
            .presented
            .vertices
            .iter()
            .map(|v| {
                let p = display_to_ndc(Vec2::from(v.position), self.display);
                Vertex::new(p.x, p.y, v.color)
            })
            .collect();
        Frame {
            clear_color: self.presented.clear_color,
            vertices,
            labels: self.presented.labels.clone(),
        }
    }
}

impl Canvas for VertexCanvas {
    fn clear(&mut self, color: Color) {
        self.building = Frame {
            clear_color: color,
            ..Frame::default()
        };
    }

    fn draw_background(&mut self) {
        let half = self.display / 2.0;
        self.building
            .vertices
            .extend(shapes::quad(half, half, 0.0, colors::BACKGROUND));
    }

    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, rotation: f32) {
        let half = self.sprites.half_extent(sprite);
        let vertices = &mut self.building.vertices;
        match sprite {
            Sprite::Ball => {
                let radius = half.min_element();
                vertices.extend(shapes::circle(pos, radius, colors::BALL, CIRCLE_SEGMENTS));
                // Stripe so rotation is visible
                vertices.extend(shapes::quad(
                    pos,
                    Vec2::new(radius * 0.8, radius * 0.15),
                    rotation,
                    colors::BALL_MARK,
                ));
            }
            Sprite::Coin => {
                vertices.extend(shapes::circle(
                    pos,
                    half.min_element(),
                    colors::COIN,
                    CIRCLE_SEGMENTS,
                ));
            }
            Sprite::Paddle => vertices.extend(shapes::quad(pos, half, rotation, colors::PADDLE)),
            Sprite::Chest => vertices.extend(shapes::quad(pos, half, rotation, colors::CHEST)),
        }
    }

    fn draw_rect(&mut self, min: Vec2, max: Vec2, color: Color) {
        self.building
            .vertices
            .extend(shapes::rect_outline(min, max, OUTLINE_THICKNESS, color));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign) {
        self.building.labels.push(TextLabel {
            text: text.to_string(),
            pos,
            align,
        });
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.building);
        self.frames_presented += 1;
    }
}
