//! Game state and core simulation types
//!
//! The ball and paddle are plain fields: there is always exactly one of each.
//! Chests and coins live in arenas keyed by stable `EntityId`s.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, EntityId};
use super::geometry::Aabb;
use crate::tuning::Tuning;

/// Kinematic state shared by every moving entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Position before the last integration step
    pub old_pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    /// Sprite rotation (radians); visual only
    pub rotation: f32,
    pub spin: f32,
}

impl Body {
    /// A body at rest
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            old_pos: pos,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            rotation: 0.0,
            spin: 0.0,
        }
    }

    /// Standard motion step: remember the old position, apply acceleration,
    /// then velocity.
    pub fn integrate(&mut self) {
        self.old_pos = self.pos;
        self.vel += self.accel;
        self.pos += self.vel;
        self.rotation += self.spin;
    }

    /// Snap to a position and velocity with no motion history
    pub fn place(&mut self, pos: Vec2, vel: Vec2) {
        self.pos = pos;
        self.old_pos = pos;
        self.vel = vel;
    }

    pub fn hitbox(&self, half_extent: Vec2) -> Aabb {
        Aabb::new(self.pos, half_extent)
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
}

impl Ball {
    pub fn new(tuning: &Tuning) -> Self {
        let mut body = Body::at(tuning.ball.start_pos);
        body.vel = tuning.ball.start_velocity;
        body.accel = tuning.ball.acceleration;
        body.spin = tuning.ball.spin;
        Self { body }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Body,
}

impl Paddle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            body: Body::at(tuning.paddle.start_pos),
        }
    }
}

/// A breakable chest. Chests never move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chest {
    pub pos: Vec2,
    pub points: u64,
}

/// A coin dropped by a broken chest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub body: Body,
    pub points: u64,
}

/// Running score. Only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score(u64);

impl Score {
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn award(&mut self, points: u64) {
        self.0 = self.0.saturating_add(points);
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the paddle using the given contact edge
    PaddleBounce { edge: Vec2 },
    CeilingBounce,
    WallBounce,
    /// Ball broke a chest, which dropped a coin at the chest's position
    ChestBroken {
        chest: EntityId,
        coin: EntityId,
        at: Vec2,
        edge: Vec2,
        points: u64,
    },
    CoinCollected { coin: EntityId, points: u64 },
    /// Coin fell off the bottom of the display
    CoinLost { coin: EntityId },
    /// Ball and paddle were reset to their start state
    Served,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub ball: Ball,
    pub paddle: Paddle,
    pub chests: Arena<Chest>,
    pub coins: Arena<Coin>,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh game: ball and paddle at their start, chest grid laid out
    pub fn new(tuning: Tuning) -> Self {
        let mut state = Self::without_chests(tuning);
        super::tick::generate_chests(&mut state);
        state
    }

    /// Ball and paddle only, no chests
    pub fn without_chests(tuning: Tuning) -> Self {
        Self {
            ball: Ball::new(&tuning),
            paddle: Paddle::new(&tuning),
            tuning,
            chests: Arena::new(),
            coins: Arena::new(),
            score: Score::default(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn spawn_chest(&mut self, pos: Vec2) -> EntityId {
        let id = self.next_entity_id();
        let points = self.tuning.chests.points;
        self.chests.insert(id, Chest { pos, points })
    }

    /// Drop a coin at rest; the coin update gives it the fall velocity
    pub fn spawn_coin(&mut self, pos: Vec2) -> EntityId {
        let id = self.next_entity_id();
        let points = self.tuning.coin.points;
        self.coins.insert(
            id,
            Coin {
                body: Body::at(pos),
                points,
            },
        )
    }

    /// Reset ball and paddle to their start state.
    ///
    /// Chests, coins and score are left alone.
    pub fn serve(&mut self) {
        let ball = &self.tuning.ball;
        self.ball.body.place(ball.start_pos, ball.start_velocity);

        let paddle = &self.tuning.paddle;
        self.paddle.body.place(paddle.start_pos, paddle.speed);
    }

    pub fn ball_hitbox(&self) -> Aabb {
        self.ball.body.hitbox(self.tuning.ball.half_extent)
    }

    pub fn paddle_hitbox(&self) -> Aabb {
        self.paddle.body.hitbox(self.tuning.paddle.half_extent)
    }

    pub fn chest_hitbox(&self, chest: &Chest) -> Aabb {
        Aabb::new(chest.pos, self.tuning.chests.half_extent)
    }

    pub fn coin_hitbox(&self, coin: &Coin) -> Aabb {
        coin.body.hitbox(self.tuning.coin.half_extent)
    }
}
