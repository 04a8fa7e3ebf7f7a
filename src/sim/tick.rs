//! Fixed timestep simulation tick
//!
//! One tick is one game frame. Velocities are in display units per tick.
//! Order within a tick: paddle, ball, chests, coins, serve. Hits are detected
//! and resolved before anything is destroyed, and tombstones are compacted at
//! the very end so the next tick iterates clean collections.

use glam::Vec2;

use super::collision::{aabb_overlap, apply_reflection};
use super::geometry::{Axis, is_leaving_display};
use super::state::{GameEvent, GameState};
use crate::platform::{Key, Keyboard};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Reset ball and paddle to their start state
    pub serve: bool,
    /// End the session (handled by the frame driver)
    pub quit: bool,
}

impl TickInput {
    pub fn from_keyboard<K: Keyboard + ?Sized>(keys: &K) -> Self {
        Self {
            left: keys.is_down(Key::Left),
            right: keys.is_down(Key::Right),
            serve: keys.is_down(Key::Space),
            quit: keys.is_down(Key::Escape),
        }
    }
}

/// Lay out the chest grid, evenly spaced across the display width
pub fn generate_chests(state: &mut GameState) {
    let chests = state.tuning.chests.clone();
    let cols = chests.cols as f32;
    let gap = ((state.tuning.display.x - chests.size * cols) / (cols + 1.0)).round();
    let pitch = chests.size + gap;
    let offset = chests.size / 2.0 + gap;

    for row in 0..chests.rows {
        for col in 0..chests.cols {
            let pos = Vec2::new(col as f32 * pitch + offset, row as f32 * pitch + offset);
            state.spawn_chest(pos);
        }
    }
    log::debug!(
        "Generated {} chests ({}x{}, gap {})",
        state.chests.len(),
        chests.rows,
        chests.cols,
        gap
    );
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.time_ticks += 1;

    update_paddle(state, input, &mut events);
    update_ball(state, &mut events);
    update_chests(state, &mut events);
    update_coins(state, &mut events);

    if input.serve {
        state.serve();
        events.push(GameEvent::Served);
    }

    state.chests.compact();
    state.coins.compact();

    for event in &events {
        log::debug!("tick {}: {:?}", state.time_ticks, event);
    }
    events
}

/// Steer the paddle, keep it on screen and bounce the ball off it
fn update_paddle(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let tuning = &state.tuning;
    let paddle = &mut state.paddle.body;

    paddle.vel = if input.left {
        -tuning.paddle.speed
    } else if input.right {
        tuning.paddle.speed
    } else {
        Vec2::ZERO
    };

    if is_leaving_display(paddle, tuning.paddle.half_extent, tuning.display, Axis::Both) {
        paddle.pos = paddle.old_pos;
    }

    let ball = &mut state.ball.body;
    if aabb_overlap(
        paddle.pos,
        tuning.paddle.half_extent,
        ball.pos,
        tuning.ball.half_extent,
    ) {
        let obstacle = paddle.hitbox(tuning.paddle.half_extent);
        let edge = apply_reflection(ball, tuning.ball.half_extent, &obstacle, &tuning.contact_model);
        events.push(GameEvent::PaddleBounce { edge });
    }

    paddle.integrate();
}

/// Ceiling and wall bounces, then move. There is no floor.
fn update_ball(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let tuning = &state.tuning;
    let ball = &mut state.ball.body;

    if ball.pos.y < tuning.ball.half_extent.y {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::CeilingBounce);
    }
    if is_leaving_display(ball, tuning.ball.half_extent, tuning.display, Axis::Horizontal) {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }

    ball.integrate();
}

/// Break every chest the ball overlaps. Each hit bounces the ball, drops a
/// coin and scores before the chest is removed.
fn update_chests(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for chest_id in state.chests.ids() {
        let Some(chest) = state.chests.get(chest_id) else {
            continue;
        };
        let obstacle = state.chest_hitbox(chest);
        let (at, points) = (chest.pos, chest.points);

        let ball_half = state.tuning.ball.half_extent;
        if !aabb_overlap(obstacle.center, obstacle.half_extent, state.ball.body.pos, ball_half) {
            continue;
        }

        let edge = apply_reflection(
            &mut state.ball.body,
            ball_half,
            &obstacle,
            &state.tuning.contact_model,
        );
        let coin = state.spawn_coin(at);
        state.score.award(points);
        state.chests.remove(chest_id);

        events.push(GameEvent::ChestBroken {
            chest: chest_id,
            coin,
            at,
            edge,
            points,
        });
    }
}

/// Drop coins, collect the ones touching the paddle, discard the ones that
/// fell off screen
fn update_coins(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let fall_velocity = state.tuning.coin.fall_velocity;
    for (_, coin) in state.coins.iter_mut() {
        coin.body.vel = fall_velocity;
        coin.body.integrate();
    }

    let paddle = state.paddle_hitbox();
    let floor = state.tuning.display.y + state.tuning.coin.cleanup_margin;

    for coin_id in state.coins.ids() {
        let Some(coin) = state.coins.get(coin_id) else {
            continue;
        };
        let hitbox = state.coin_hitbox(coin);
        let points = coin.points;

        if hitbox.overlaps(&paddle) {
            state.score.award(points);
            state.coins.remove(coin_id);
            events.push(GameEvent::CoinCollected {
                coin: coin_id,
                points,
            });
        } else if hitbox.center.y > floor {
            state.coins.remove(coin_id);
            events.push(GameEvent::CoinLost { coin: coin_id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::EDGE_TOP;
    use crate::tuning::Tuning;

    fn open_field() -> GameState {
        GameState::without_chests(Tuning::default())
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_chest_grid_layout() {
        let state = GameState::new(Tuning::default());
        let positions: Vec<Vec2> = state.chests.iter().map(|(_, c)| c.pos).collect();
        assert_eq!(positions.len(), 36);
        // gap = round((1280 - 96 * 12) / 13) = 10
        assert_eq!(positions[0], Vec2::new(58.0, 58.0));
        assert_eq!(positions[1], Vec2::new(164.0, 58.0));
        assert_eq!(positions[12], Vec2::new(58.0, 164.0));
        assert_eq!(positions[35], Vec2::new(1224.0, 270.0));
    }

    #[test]
    fn test_ball_moves_one_step_without_collisions() {
        let mut state = open_field();
        let events = tick(&mut state, &idle());

        assert!(events.is_empty());
        assert_eq!(state.ball.body.pos, Vec2::new(1280.0 / 2.0 - 245.0, 720.0 / 2.0 + 5.0));
        assert_eq!(state.ball.body.old_pos, Vec2::new(390.0, 360.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_paddle_follows_input() {
        let mut state = open_field();
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &left);
        assert_eq!(state.paddle.body.pos, Vec2::new(630.0, 620.0));

        // Left wins when both are held
        let both = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &both);
        assert_eq!(state.paddle.body.pos, Vec2::new(620.0, 620.0));

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right);
        assert_eq!(state.paddle.body.pos, Vec2::new(630.0, 620.0));

        tick(&mut state, &idle());
        assert_eq!(state.paddle.body.vel, Vec2::ZERO);
        assert_eq!(state.paddle.body.pos, Vec2::new(630.0, 620.0));
    }

    #[test]
    fn test_paddle_rolls_back_at_display_edge() {
        let mut state = open_field();
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        // Paddle right edge one step short of the display edge
        state.paddle.body.place(Vec2::new(1175.0, 620.0), Vec2::ZERO);

        tick(&mut state, &right);
        assert_eq!(state.paddle.body.pos, Vec2::new(1185.0, 620.0));

        // Now poking out and moving right: rolled back, then moved again
        for _ in 0..5 {
            tick(&mut state, &right);
            assert_eq!(state.paddle.body.pos, Vec2::new(1185.0, 620.0));
        }
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut state = open_field();
        state.ball.body.place(Vec2::new(640.0, 45.0), Vec2::new(5.0, -5.0));

        let events = tick(&mut state, &idle());

        assert!(events.contains(&GameEvent::CeilingBounce));
        assert_eq!(state.ball.body.vel, Vec2::new(5.0, 5.0));
        assert_eq!(state.ball.body.pos, Vec2::new(645.0, 50.0));
    }

    #[test]
    fn test_wall_bounce() {
        let mut state = open_field();
        state.ball.body.place(Vec2::new(1235.0, 300.0), Vec2::new(5.0, 5.0));

        let events = tick(&mut state, &idle());

        assert!(events.contains(&GameEvent::WallBounce));
        assert_eq!(state.ball.body.vel, Vec2::new(-5.0, 5.0));
        assert_eq!(state.ball.body.pos, Vec2::new(1230.0, 305.0));
    }

    #[test]
    fn test_ball_bounces_off_paddle() {
        let mut state = open_field();
        // Ball resting just above the paddle, overlapping it from the top
        state.ball.body.place(Vec2::new(640.0, 560.0), Vec2::new(5.0, 5.0));
        state.ball.body.old_pos = Vec2::new(635.0, 548.0);

        let events = tick(&mut state, &idle());

        assert_eq!(events, vec![GameEvent::PaddleBounce { edge: EDGE_TOP }]);
        // Reflected to (5, -5), nudged once, then integrated once
        assert_eq!(state.ball.body.vel, Vec2::new(5.0, -5.0));
        assert_eq!(state.ball.body.pos, Vec2::new(650.0, 550.0));
    }

    #[test]
    fn test_chest_break_drops_coin_and_scores() {
        let mut state = open_field();
        let chest = state.spawn_chest(Vec2::new(500.0, 300.0));
        // After moving, the ball overlaps the chest from above
        state.ball.body.place(Vec2::new(500.0, 195.0), Vec2::new(0.0, 10.0));

        let events = tick(&mut state, &idle());

        let broken: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::ChestBroken { chest, coin, at, edge, points } => {
                    Some((*chest, *coin, *at, *edge, *points))
                }
                _ => None,
            })
            .collect();
        assert_eq!(broken.len(), 1);
        let (broken_chest, coin, at, edge, points) = broken[0];
        assert_eq!(broken_chest, chest);
        assert_eq!(at, Vec2::new(500.0, 300.0));
        assert_eq!(edge, EDGE_TOP);
        assert_eq!(points, 100);

        assert!(state.chests.is_empty());
        assert_eq!(state.chests.tombstones(), 0);
        assert_eq!(state.coins.len(), 1);
        // The new coin already took its first fall step this tick
        assert_eq!(state.coins.get(coin).map(|c| c.body.pos), Some(Vec2::new(500.0, 303.0)));
        assert_eq!(state.coins.get(coin).map(|c| c.body.old_pos), Some(at));
        assert_eq!(state.score.value(), 100);
        // Ball heads back up
        assert_eq!(state.ball.body.vel, Vec2::new(0.0, -10.0));
    }

    #[test]
    fn test_broken_chest_is_never_hit_again() {
        let mut state = open_field();
        state.spawn_chest(Vec2::new(500.0, 300.0));
        state.ball.body.place(Vec2::new(500.0, 195.0), Vec2::new(0.0, 10.0));
        tick(&mut state, &idle());

        // Force the ball straight back into where the chest was
        state.ball.body.place(Vec2::new(500.0, 300.0), Vec2::new(0.0, 0.0));
        let events = tick(&mut state, &idle());

        assert!(!events.iter().any(|e| matches!(e, GameEvent::ChestBroken { .. })));
        assert_eq!(state.score.value(), 100);
    }

    #[test]
    fn test_coin_falls_at_constant_speed() {
        let mut state = open_field();
        let coin = state.spawn_coin(Vec2::new(100.0, 100.0));
        if let Some(c) = state.coins.get_mut(coin) {
            c.body.vel = Vec2::new(40.0, -40.0);
        }

        tick(&mut state, &idle());
        tick(&mut state, &idle());

        let body = state.coins.get(coin).map(|c| c.body).expect("coin still live");
        assert_eq!(body.vel, Vec2::new(0.0, 3.0));
        assert_eq!(body.pos, Vec2::new(100.0, 106.0));
    }

    #[test]
    fn test_coin_collected_by_paddle() {
        let mut state = open_field();
        // One fall step puts the coin's bottom edge past the paddle's top
        let coin = state.spawn_coin(Vec2::new(640.0, 560.0));

        let events = tick(&mut state, &idle());

        assert_eq!(events, vec![GameEvent::CoinCollected { coin, points: 300 }]);
        assert!(state.coins.is_empty());
        assert_eq!(state.score.value(), 300);
    }

    #[test]
    fn test_coin_touching_paddle_is_not_collected() {
        let mut state = open_field();
        // After one fall step the coin's bottom edge sits exactly on the paddle's top
        let coin = state.spawn_coin(Vec2::new(640.0, 547.0));

        let events = tick(&mut state, &idle());

        assert!(events.is_empty());
        assert_eq!(
            state.coins.get(coin).map(|c| state.coin_hitbox(c).max().y),
            Some(state.paddle_hitbox().min().y)
        );
        assert_eq!(state.score.value(), 0);
    }

    #[test]
    fn test_coin_below_display_is_discarded() {
        let mut state = open_field();
        // Away from the paddle, about to cross H + 100
        let coin = state.spawn_coin(Vec2::new(100.0, 819.0));

        let events = tick(&mut state, &idle());

        assert_eq!(events, vec![GameEvent::CoinLost { coin }]);
        assert!(state.coins.is_empty());
        assert_eq!(state.score.value(), 0);
    }

    #[test]
    fn test_coin_at_cleanup_line_is_kept() {
        let mut state = open_field();
        state.spawn_coin(Vec2::new(100.0, 817.0));

        tick(&mut state, &idle());

        // 820 is not past 720 + 100
        assert_eq!(state.coins.len(), 1);
    }

    #[test]
    fn test_serve_input_resets_after_simulating() {
        let mut state = open_field();
        state.spawn_chest(Vec2::new(1000.0, 100.0));
        state.score.award(700);
        state.ball.body.place(Vec2::new(200.0, 500.0), Vec2::new(-5.0, -5.0));
        let serve = TickInput {
            serve: true,
            left: true,
            ..Default::default()
        };

        let events = tick(&mut state, &serve);

        assert_eq!(events.last(), Some(&GameEvent::Served));
        assert_eq!(state.ball.body.pos, Vec2::new(390.0, 360.0));
        assert_eq!(state.ball.body.vel, Vec2::new(5.0, 5.0));
        assert_eq!(state.paddle.body.pos, Vec2::new(640.0, 620.0));
        assert_eq!(state.paddle.body.vel, Vec2::new(10.0, 0.0));
        assert_eq!(state.score.value(), 700);
        assert_eq!(state.chests.len(), 1);
    }
}
