//! Frame driver
//!
//! Owns the game state and the frame clock. Each host frame it samples the
//! keyboard, runs however many fixed ticks are due and draws the scene.

use crate::platform::{FrameClock, Keyboard};
use crate::renderer::{Canvas, draw_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Whether the host should keep calling `Game::frame`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Running,
    Quit,
}

pub struct Game {
    state: GameState,
    settings: Settings,
    clock: FrameClock,
}

impl Game {
    pub fn new(tuning: Tuning, settings: Settings) -> Self {
        Self::from_state(GameState::new(tuning), settings)
    }

    /// Drive an already prepared state
    pub fn from_state(state: GameState, settings: Settings) -> Self {
        log::info!(
            "New game: {} chests, contact model {:?}",
            state.chests.len(),
            state.tuning.contact_model
        );
        Self {
            state,
            settings,
            clock: FrameClock::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Run one host frame.
    ///
    /// `elapsed` is the wall time since the previous frame in seconds. The
    /// keyboard is sampled once and applied to every tick of the frame.
    pub fn frame<K, C>(&mut self, elapsed: f32, keys: &K, canvas: &mut C) -> FrameStatus
    where
        K: Keyboard + ?Sized,
        C: Canvas + ?Sized,
    {
        let input = TickInput::from_keyboard(keys);
        if input.quit {
            log::info!(
                "Quit after {} ticks, score {}",
                self.state.time_ticks,
                self.state.score
            );
            return FrameStatus::Quit;
        }

        let steps = self.clock.advance(elapsed);
        for _ in 0..steps {
            let before = self.state.score;
            let events = tick(&mut self.state, &input);
            for event in &events {
                if matches!(event, GameEvent::Served) {
                    log::info!("Served at tick {}", self.state.time_ticks);
                }
            }
            if self.state.score != before {
                log::info!("Score {} -> {}", before, self.state.score);
            }
        }

        draw_scene(&self.state, &self.settings, canvas);
        FrameStatus::Running
    }
}
