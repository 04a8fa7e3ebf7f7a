//! Chest Breakout - smash chests, catch the coins they drop
//!
//! Core modules:
//! - `sim`: Deterministic simulation (AABB collisions, reflection, game state)
//! - `renderer`: Draw-call surface, vertex tessellation and WebGPU backend
//! - `platform`: Keyboard snapshot and fixed-step frame clock
//! - `game`: Frame driver tying simulation, input and rendering together
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::{FrameStatus, Game};
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the clock accepts (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Display dimensions
    pub const DISPLAY_WIDTH: f32 = 1280.0;
    pub const DISPLAY_HEIGHT: f32 = 720.0;
}
