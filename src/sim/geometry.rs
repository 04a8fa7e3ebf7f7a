//! Axis-aligned boxes and display-boundary queries
//!
//! Display space has its origin at the top-left corner with y growing downward.
//! Boxes are stored as center + half-extent so overlap tests reduce to sums.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Body;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extent: Vec2,
}

impl Aabb {
    pub const fn new(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extent
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extent
    }

    /// Strict overlap; boxes sharing an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }

    /// Grow the box by another half-extent (Minkowski sum with a centered box)
    pub fn expanded(&self, by: Vec2) -> Self {
        Self::new(self.center, self.half_extent + by)
    }
}

/// Which display axes a boundary query looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    Both,
}

/// Whether a body is moving out of the display area.
///
/// A body is leaving when its box pokes past a display edge while its velocity
/// still points outward. A body sitting past an edge but heading back in is
/// not leaving.
pub fn is_leaving_display(body: &Body, half_extent: Vec2, display: Vec2, axis: Axis) -> bool {
    let min = body.pos - half_extent;
    let max = body.pos + half_extent;

    if axis != Axis::Vertical {
        if min.x < 0.0 && body.vel.x < 0.0 {
            return true;
        }
        if max.x > display.x && body.vel.x > 0.0 {
            return true;
        }
    }
    if axis != Axis::Horizontal {
        if min.y < 0.0 && body.vel.y < 0.0 {
            return true;
        }
        if max.y > display.y && body.vel.y > 0.0 {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISPLAY: Vec2 = Vec2::new(1280.0, 720.0);

    fn body(pos: Vec2, vel: Vec2) -> Body {
        let mut body = Body::at(pos);
        body.vel = vel;
        body
    }

    #[test]
    fn test_aabb_corners() {
        let b = Aabb::new(Vec2::new(100.0, 50.0), Vec2::new(10.0, 5.0));
        assert_eq!(b.min(), Vec2::new(90.0, 45.0));
        assert_eq!(b.max(), Vec2::new(110.0, 55.0));
    }

    #[test]
    fn test_aabb_overlap_and_touching() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        let overlapping = Aabb::new(Vec2::new(15.0, 0.0), Vec2::splat(10.0));
        let touching = Aabb::new(Vec2::new(20.0, 0.0), Vec2::splat(10.0));

        assert!(a.overlaps(&overlapping));
        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));
    }

    #[test]
    fn test_expanded_keeps_center() {
        let b = Aabb::new(Vec2::new(500.0, 300.0), Vec2::splat(50.0));
        let grown = b.expanded(Vec2::new(100.0, 20.0));
        assert_eq!(grown.center, b.center);
        assert_eq!(grown.min(), Vec2::new(350.0, 230.0));
        assert_eq!(grown.max(), Vec2::new(650.0, 370.0));
    }

    #[test]
    fn test_leaving_display_needs_outward_velocity() {
        let half = Vec2::splat(50.0);
        // Past the right edge, moving right
        assert!(is_leaving_display(
            &body(Vec2::new(1250.0, 300.0), Vec2::new(5.0, 0.0)),
            half,
            DISPLAY,
            Axis::Horizontal
        ));
        // Past the right edge, already heading back
        assert!(!is_leaving_display(
            &body(Vec2::new(1250.0, 300.0), Vec2::new(-5.0, 0.0)),
            half,
            DISPLAY,
            Axis::Horizontal
        ));
        // Fully inside
        assert!(!is_leaving_display(
            &body(Vec2::new(640.0, 360.0), Vec2::new(5.0, 5.0)),
            half,
            DISPLAY,
            Axis::Both
        ));
    }

    #[test]
    fn test_leaving_display_respects_axis() {
        let half = Vec2::splat(50.0);
        let falling = body(Vec2::new(640.0, 700.0), Vec2::new(0.0, 5.0));
        assert!(!is_leaving_display(&falling, half, DISPLAY, Axis::Horizontal));
        assert!(is_leaving_display(&falling, half, DISPLAY, Axis::Vertical));
        assert!(is_leaving_display(&falling, half, DISPLAY, Axis::Both));
    }
}
