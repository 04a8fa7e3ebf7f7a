//! Frame composition: what gets drawn, in which order

use super::canvas::{Canvas, Sprite, TextAlign};
use super::vertex::colors;
use crate::settings::Settings;
use crate::sim::{Aabb, GameState};

fn outline<C: Canvas + ?Sized>(canvas: &mut C, settings: &Settings, hitbox: Aabb) {
    if settings.show_hitboxes {
        canvas.draw_rect(hitbox.min(), hitbox.max(), settings.hitbox_color);
    }
}

/// Draw one full frame of the game
pub fn draw_scene<C: Canvas + ?Sized>(state: &GameState, settings: &Settings, canvas: &mut C) {
    canvas.clear(colors::CLEAR);
    canvas.draw_background();

    let paddle = &state.paddle.body;
    canvas.draw_sprite(Sprite::Paddle, paddle.pos, 0.0);
    outline(canvas, settings, state.paddle_hitbox());

    let ball = &state.ball.body;
    canvas.draw_sprite(Sprite::Ball, ball.pos, ball.rotation);
    outline(canvas, settings, state.ball_hitbox());

    for (_, chest) in state.chests.iter() {
        canvas.draw_sprite(Sprite::Chest, chest.pos, 0.0);
        outline(canvas, settings, state.chest_hitbox(chest));
    }

    // Coins get no outline
    for (_, coin) in state.coins.iter() {
        canvas.draw_sprite(Sprite::Coin, coin.body.pos, coin.body.rotation);
    }

    if settings.show_score {
        canvas.draw_text(
            &settings.score_text(state.score),
            settings.score_anchor,
            TextAlign::Centre,
        );
    }

    canvas.present();
}
