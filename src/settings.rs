//! Presentation preferences
//!
//! Kept apart from `Tuning`: nothing here changes how the game plays.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DISPLAY_WIDTH;
use crate::renderer::{Color, colors};

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Outline ball, paddle and chest hitboxes
    pub show_hitboxes: bool,
    pub hitbox_color: Color,

    // === HUD ===
    pub show_score: bool,
    /// Text placed before the score value
    pub score_label: String,
    /// Center of the score text
    pub score_anchor: Vec2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hitboxes: true,
            hitbox_color: colors::HITBOX,

            show_score: true,
            score_label: "High Score".to_string(),
            score_anchor: Vec2::new(DISPLAY_WIDTH / 2.0, 100.0),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, keeping defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to read settings {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// The HUD line for a score
    pub fn score_text(&self, score: impl std::fmt::Display) -> String {
        format!("{}: {}", self.score_label, score)
    }
}
