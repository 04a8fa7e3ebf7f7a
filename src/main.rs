//! Chest Breakout - headless soak runner
//!
//! Plays a session with a seeded random keyboard, rendering every frame into a
//! vertex canvas, and reports the final score.
//!
//! Environment:
//! - `CHEST_BREAKOUT_TUNING`: path to a JSON tuning file
//! - `CHEST_BREAKOUT_SETTINGS`: path to a JSON settings file
//! - `CHEST_BREAKOUT_FRAMES`: frames to play (default 3600)
//! - `CHEST_BREAKOUT_SEED`: keyboard seed (default 0)

#[cfg(not(target_arch = "wasm32"))]
mod soak {
    use chest_breakout::consts::SIM_DT;
    use chest_breakout::platform::{Key, KeyState};
    use chest_breakout::renderer::VertexCanvas;
    use chest_breakout::{FrameStatus, Game, Settings, Tuning};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    const DEFAULT_FRAMES: u64 = 3600;

    fn env_u64(name: &str, default: u64) -> u64 {
        match std::env::var(name) {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring {name}={value:?}: {e}");
                default
            }),
            Err(_) => default,
        }
    }

    /// Random player: holds a direction for a while, serves when the ball is lost
    struct Autopilot {
        rng: Pcg32,
        keys: KeyState,
        hold_frames: u32,
    }

    impl Autopilot {
        fn new(seed: u64) -> Self {
            Self {
                rng: Pcg32::seed_from_u64(seed),
                keys: KeyState::new(),
                hold_frames: 0,
            }
        }

        fn update(&mut self, game: &Game) -> &KeyState {
            let state = game.state();

            let ball_top = state.ball_hitbox().min().y;
            self.keys.set(Key::Space, ball_top > state.tuning.display.y);

            if self.hold_frames == 0 {
                self.keys.release(Key::Left);
                self.keys.release(Key::Right);
                match self.rng.random_range(0..3) {
                    0 => self.keys.press(Key::Left),
                    1 => self.keys.press(Key::Right),
                    _ => {}
                }
                self.hold_frames = self.rng.random_range(10..60);
            }
            self.hold_frames -= 1;

            &self.keys
        }

        fn quit(&mut self) -> &KeyState {
            self.keys.release_all();
            self.keys.press(Key::Escape);
            &self.keys
        }
    }

    pub fn run() {
        let tuning = match std::env::var("CHEST_BREAKOUT_TUNING") {
            Ok(path) => Tuning::load_or_default(path),
            Err(_) => Tuning::default(),
        };
        let settings = match std::env::var("CHEST_BREAKOUT_SETTINGS") {
            Ok(path) => Settings::load(path),
            Err(_) => Settings::default(),
        };
        let frames = env_u64("CHEST_BREAKOUT_FRAMES", DEFAULT_FRAMES);
        let seed = env_u64("CHEST_BREAKOUT_SEED", 0);
        log::info!("Playing {frames} frames with seed {seed}");

        let mut canvas = VertexCanvas::new(&tuning);
        let mut game = Game::new(tuning, settings);
        let mut pilot = Autopilot::new(seed);

        let mut frame = 0u64;
        loop {
            let keys = if frame < frames {
                pilot.update(&game)
            } else {
                pilot.quit()
            };
            if game.frame(SIM_DT, keys, &mut canvas) == FrameStatus::Quit {
                break;
            }
            frame += 1;

            if frame % 600 == 0 {
                let state = game.state();
                let upload = canvas.ndc_frame();
                log::debug!(
                    "frame {frame}: {} chests, {} coins, {} vertices ({} bytes)",
                    state.chests.len(),
                    state.coins.len(),
                    upload.vertices.len(),
                    upload.as_bytes().len()
                );
            }
        }

        let state = game.state();
        log::info!(
            "Finished after {} ticks: score {}, {} chests left",
            state.time_ticks,
            state.score,
            state.chests.len()
        );
        if let Some(label) = canvas.frame().labels.first() {
            println!("{}", label.text);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Chest Breakout (headless) starting...");
    soak::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page on the web
}
