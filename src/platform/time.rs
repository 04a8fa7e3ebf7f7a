//! Fixed-step frame clock
//!
//! Accumulates real frame time and hands out whole simulation steps.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
    total_steps: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FrameClock {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            max_substeps: MAX_SUBSTEPS,
            accumulator: 0.0,
            total_steps: 0,
        }
    }

    /// Steps taken since the clock was created
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Feed one frame's elapsed time and return how many steps to simulate.
    ///
    /// Long frames are clamped and at most `MAX_SUBSTEPS` steps are returned;
    /// leftover time past that cap is dropped.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }

        self.total_steps += u64::from(substeps);
        substeps
    }
}
