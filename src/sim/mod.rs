//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, velocities in units per tick
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies beyond the keyboard snapshot

pub mod arena;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use arena::{Arena, EntityId};
pub use collision::{
    ContactClassifier, ContactModel, NearestEdge, SweptEdge, aabb_overlap, apply_reflection,
    nearest_edge, reflect_velocity, swept_edge,
};
pub use geometry::{Aabb, Axis, is_leaving_display};
pub use state::{Ball, Body, Chest, Coin, GameEvent, GameState, Paddle, Score};
pub use tick::{TickInput, generate_chests, tick};
