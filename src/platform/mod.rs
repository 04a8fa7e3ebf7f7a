//! Platform abstraction layer
//!
//! The host (window, event loop) feeds the game through two narrow seams:
//! - Keyboard state polled once per frame
//! - Wall-clock frame deltas turned into fixed simulation steps

pub mod input;
pub mod time;

pub use input::{Key, KeyState, Keyboard};
pub use time::FrameClock;
