//! Data-driven game balance
//!
//! Every per-type constant of the game lives here: display size, hitbox
//! half-extents, start positions, speeds and point values. `Tuning::default()`
//! is the shipped game. Overrides are read from JSON; missing fields keep
//! their defaults.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::sim::ContactModel;

/// Failure to load or accept a tuning file
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallTuning {
    pub half_extent: Vec2,
    pub start_pos: Vec2,
    pub start_velocity: Vec2,
    /// Added to velocity on every integration step and after every bounce
    pub acceleration: Vec2,
    /// Sprite spin per tick (radians)
    pub spin: f32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            half_extent: Vec2::new(50.0, 50.0),
            start_pos: Vec2::new(DISPLAY_WIDTH / 2.0 - 250.0, DISPLAY_HEIGHT / 2.0),
            start_velocity: Vec2::new(5.0, 5.0),
            acceleration: Vec2::ZERO,
            spin: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleTuning {
    pub half_extent: Vec2,
    pub start_pos: Vec2,
    /// Velocity while the right key is held; left uses the negation.
    /// Also the velocity the paddle is given on serve.
    pub speed: Vec2,
}

impl Default for PaddleTuning {
    fn default() -> Self {
        Self {
            half_extent: Vec2::new(100.0, 20.0),
            start_pos: Vec2::new(DISPLAY_WIDTH / 2.0, DISPLAY_HEIGHT - 100.0),
            speed: Vec2::new(10.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChestTuning {
    /// Sprite edge length, used for grid spacing
    pub size: f32,
    pub rows: u32,
    pub cols: u32,
    pub half_extent: Vec2,
    pub points: u64,
}

impl Default for ChestTuning {
    fn default() -> Self {
        Self {
            size: 96.0,
            rows: 3,
            cols: 12,
            half_extent: Vec2::new(50.0, 50.0),
            points: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinTuning {
    pub half_extent: Vec2,
    /// Forced onto every coin each tick
    pub fall_velocity: Vec2,
    pub points: u64,
    /// How far below the display a coin may fall before it is dropped
    pub cleanup_margin: f32,
}

impl Default for CoinTuning {
    fn default() -> Self {
        Self {
            half_extent: Vec2::new(50.0, 50.0),
            fall_velocity: Vec2::new(0.0, 3.0),
            points: 300,
            cleanup_margin: 100.0,
        }
    }
}

/// Complete game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub display: Vec2,
    pub ball: BallTuning,
    pub paddle: PaddleTuning,
    pub chests: ChestTuning,
    pub coin: CoinTuning,
    pub contact_model: ContactModel,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            display: Vec2::new(DISPLAY_WIDTH, DISPLAY_HEIGHT),
            ball: BallTuning::default(),
            paddle: PaddleTuning::default(),
            chests: ChestTuning::default(),
            coin: CoinTuning::default(),
            contact_model: ContactModel::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Read a tuning file, falling back to the shipped defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(name: &str, v: Vec2) -> Result<(), TuningError> {
            if v.x > 0.0 && v.y > 0.0 && v.is_finite() {
                Ok(())
            } else {
                Err(TuningError::Invalid(format!(
                    "{name} must be positive and finite, got {v}"
                )))
            }
        }

        positive("display", self.display)?;
        positive("ball.half_extent", self.ball.half_extent)?;
        positive("paddle.half_extent", self.paddle.half_extent)?;
        positive("chests.half_extent", self.chests.half_extent)?;
        positive("coin.half_extent", self.coin.half_extent)?;

        if !(self.chests.size > 0.0) {
            return Err(TuningError::Invalid(format!(
                "chests.size must be positive, got {}",
                self.chests.size
            )));
        }
        if !(self.coin.cleanup_margin >= 0.0) {
            return Err(TuningError::Invalid(format!(
                "coin.cleanup_margin must not be negative, got {}",
                self.coin.cleanup_margin
            )));
        }
        Ok(())
    }
}
