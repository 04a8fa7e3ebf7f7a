//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Color, Vertex};

fn push_quad(vertices: &mut Vec<Vertex>, corners: [Vec2; 4], color: Color) {
    let [a, b, c, d] = corners;
    // Two triangles
    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(c.x, c.y, color));

    vertices.push(Vertex::new(c.x, c.y, color));
    vertices.push(Vertex::new(d.x, d.y, color));
    vertices.push(Vertex::new(a.x, a.y, color));
}

/// Generate vertices for a filled box rotated about its center
pub fn quad(center: Vec2, half_extent: Vec2, rotation: f32, color: Color) -> Vec<Vertex> {
    let axis = Vec2::from_angle(rotation);
    let corners = [
        Vec2::new(-half_extent.x, -half_extent.y),
        Vec2::new(half_extent.x, -half_extent.y),
        Vec2::new(half_extent.x, half_extent.y),
        Vec2::new(-half_extent.x, half_extent.y),
    ]
    .map(|c| center + axis.rotate(c));

    let mut vertices = Vec::with_capacity(6);
    push_quad(&mut vertices, corners, color);
    vertices
}

/// Generate vertices for an axis-aligned rectangle outline given two corners
pub fn rect_outline(min: Vec2, max: Vec2, thickness: f32, color: Color) -> Vec<Vertex> {
    let (min, max) = (min.min(max), min.max(max));
    let t = thickness.min((max.x - min.x) / 2.0).min((max.y - min.y) / 2.0).max(0.0);

    let bands = [
        // Top and bottom span the full width
        (min, Vec2::new(max.x, min.y + t)),
        (Vec2::new(min.x, max.y - t), max),
        // Sides fill the gap between them
        (Vec2::new(min.x, min.y + t), Vec2::new(min.x + t, max.y - t)),
        (Vec2::new(max.x - t, min.y + t), Vec2::new(max.x, max.y - t)),
    ];

    let mut vertices = Vec::with_capacity(bands.len() * 6);
    for (lo, hi) in bands {
        push_quad(
            &mut vertices,
            [lo, Vec2::new(hi.x, lo.y), hi, Vec2::new(lo.x, hi.y)],
            color,
        );
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
