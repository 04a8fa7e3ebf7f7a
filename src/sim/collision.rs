//! Collision detection and response for axis-aligned boxes
//!
//! Detection is a plain AABB overlap test. Response is a single reflection:
//! a classifier guesses which edge of the obstacle the mover struck, the
//! velocity is reflected about that edge and the mover is nudged out along the
//! new velocity. There is no penetration resolution beyond that nudge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use super::state::Body;

/// Contact edge for a mover striking the obstacle's left face
pub const EDGE_LEFT: Vec2 = Vec2::new(-1.0, 0.0);
/// Contact edge for a mover striking the obstacle's right face
pub const EDGE_RIGHT: Vec2 = Vec2::new(1.0, 0.0);
/// Contact edge for a mover striking the obstacle's top face (y grows downward)
pub const EDGE_TOP: Vec2 = Vec2::new(0.0, -1.0);
/// Contact edge for a mover striking the obstacle's bottom face
pub const EDGE_BOTTOM: Vec2 = Vec2::new(0.0, 1.0);

/// Overlap test for two boxes given as center + half-extent.
///
/// Boxes that exactly touch do not overlap.
#[inline]
pub fn aabb_overlap(pos_a: Vec2, half_a: Vec2, pos_b: Vec2, half_b: Vec2) -> bool {
    Aabb::new(pos_a, half_a).overlaps(&Aabb::new(pos_b, half_b))
}

/// Guess the edge of B that A ran into, from A's position before it moved.
///
/// Measures the gap between each pair of facing edges and returns the edge
/// whose gap is strictly the smallest. Ties and NaN gaps yield `Vec2::ZERO`,
/// which callers treat as "no usable edge".
///
/// This is a heuristic. A proper answer needs a swept test, see `swept_edge`.
pub fn nearest_edge(prior_pos_a: Vec2, half_a: Vec2, pos_b: Vec2, half_b: Vec2) -> Vec2 {
    let left = ((prior_pos_a.x + half_a.x) - (pos_b.x - half_b.x)).abs();
    let right = ((prior_pos_a.x - half_a.x) - (pos_b.x + half_b.x)).abs();
    let top = ((prior_pos_a.y + half_a.y) - (pos_b.y - half_b.y)).abs();
    let bottom = ((prior_pos_a.y - half_a.y) - (pos_b.y + half_b.y)).abs();

    if left < right && left < top && left < bottom {
        EDGE_LEFT
    } else if right < left && right < top && right < bottom {
        EDGE_RIGHT
    } else if top < bottom && top < left && top < right {
        EDGE_TOP
    } else if bottom < top && bottom < left && bottom < right {
        EDGE_BOTTOM
    } else {
        Vec2::ZERO
    }
}

/// Narrow one axis of a ray-vs-box slab test.
///
/// Returns the entry and exit times along the ray for this axis, or `None`
/// when the ray runs parallel to the slab and outside it.
fn slab_interval(origin: f32, delta: f32, half: f32) -> Option<(f32, f32)> {
    if delta.abs() < f32::EPSILON {
        if origin.abs() < half {
            Some((f32::NEG_INFINITY, f32::INFINITY))
        } else {
            None
        }
    } else {
        let t1 = (-half - origin) / delta;
        let t2 = (half - origin) / delta;
        Some((t1.min(t2), t1.max(t2)))
    }
}

/// Swept contact edge: trace A's motion from `from` to `to` against B grown by
/// A's half-extent and report the face it enters through.
///
/// Returns `None` if the motion never enters the box within this step,
/// including when A already overlapped B at `from`. Corner entries, where both
/// axes are crossed at the same time, give `Some(Vec2::ZERO)`.
pub fn swept_edge(from: Vec2, to: Vec2, half_a: Vec2, pos_b: Vec2, half_b: Vec2) -> Option<Vec2> {
    let target = Aabb::new(pos_b, half_b).expanded(half_a);
    let origin = from - target.center;
    let delta = to - from;

    let (x_entry, x_exit) = slab_interval(origin.x, delta.x, target.half_extent.x)?;
    let (y_entry, y_exit) = slab_interval(origin.y, delta.y, target.half_extent.y)?;

    let t_entry = x_entry.max(y_entry);
    let t_exit = x_exit.min(y_exit);
    if t_entry > t_exit || t_entry > 1.0 || t_entry < 0.0 {
        return None;
    }

    if x_entry > y_entry {
        Some(if delta.x > 0.0 { EDGE_LEFT } else { EDGE_RIGHT })
    } else if y_entry > x_entry {
        Some(if delta.y > 0.0 { EDGE_TOP } else { EDGE_BOTTOM })
    } else {
        Some(Vec2::ZERO)
    }
}

/// Decides which obstacle edge a moving body struck
pub trait ContactClassifier {
    fn contact_edge(&self, mover: &Body, mover_half: Vec2, obstacle: &Aabb) -> Vec2;
}

/// Prior-position gap heuristic (`nearest_edge`)
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestEdge;

impl ContactClassifier for NearestEdge {
    fn contact_edge(&self, mover: &Body, mover_half: Vec2, obstacle: &Aabb) -> Vec2 {
        nearest_edge(mover.old_pos, mover_half, obstacle.center, obstacle.half_extent)
    }
}

/// Swept slab test over the mover's last step, falling back to `NearestEdge`
#[derive(Debug, Clone, Copy, Default)]
pub struct SweptEdge;

impl ContactClassifier for SweptEdge {
    fn contact_edge(&self, mover: &Body, mover_half: Vec2, obstacle: &Aabb) -> Vec2 {
        swept_edge(
            mover.old_pos,
            mover.pos,
            mover_half,
            obstacle.center,
            obstacle.half_extent,
        )
        .unwrap_or_else(|| NearestEdge.contact_edge(mover, mover_half, obstacle))
    }
}

/// Classifier selection, as stored in the tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactModel {
    #[default]
    NearestEdge,
    Swept,
}

impl ContactClassifier for ContactModel {
    fn contact_edge(&self, mover: &Body, mover_half: Vec2, obstacle: &Aabb) -> Vec2 {
        match self {
            ContactModel::NearestEdge => NearestEdge.contact_edge(mover, mover_half, obstacle),
            ContactModel::Swept => SweptEdge.contact_edge(mover, mover_half, obstacle),
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Bounce `mover` off `obstacle`.
///
/// The contact edge is rotated a quarter turn to get the reflection axis, the
/// velocity is reflected about it and then negated. The net effect flips the
/// velocity component along the contact edge and keeps the other one. A zero
/// edge reverses the velocity outright.
///
/// After the bounce the mover is nudged once along its new velocity and its
/// acceleration is applied. Returns the contact edge that was used.
pub fn apply_reflection<C>(mover: &mut Body, mover_half: Vec2, obstacle: &Aabb, classifier: &C) -> Vec2
where
    C: ContactClassifier + ?Sized,
{
    let edge = classifier.contact_edge(mover, mover_half, obstacle);
    let surface_normal = edge.perp();
    let reflected = reflect_velocity(mover.vel, surface_normal);

    mover.vel = -reflected;
    mover.pos += mover.vel;
    mover.vel += mover.accel;

    edge
}
