//! Contact dispatch
//!
//! The host physics pass reports each contact as a pair of [`Collider`]s,
//! strictly before the frame update runs. The same pair may be reported more
//! than once per pass.

use glam::Vec2;

use super::state::{Collider, EntityId, GameState};
use super::strategy::BrickHit;

/// Collision filter: falling hearts only react to the original paddle
pub fn should_collide(state: &GameState, a: Collider, b: Collider) -> bool {
    match (a, b) {
        (Collider::Heart(_), other) | (other, Collider::Heart(_)) => {
            other == Collider::Paddle(state.original_paddle)
        }
        _ => true,
    }
}

/// Handle one contact between `a` and `b`
pub fn on_contact(state: &mut GameState, a: Collider, b: Collider) {
    if !should_collide(state, a, b) {
        return;
    }
    log::debug!("Contact {:?} <-> {:?}", a, b);

    for side in [a, b] {
        match side {
            Collider::Ball(id) => {
                if let Some(ball) = state.ball_mut(id) {
                    ball.register_collision();
                }
            }
            Collider::Paddle(id) => paddle_hit(state, id),
            _ => {}
        }
    }

    for (this, other) in [(a, b), (b, a)] {
        if let Collider::Brick(id) = this {
            brick_hit(state, id, other);
        }
    }
}

/// A spent mock paddle is parked below the window; the off-screen sweep
/// collects it on the next update.
fn paddle_hit(state: &mut GameState, id: EntityId) {
    let window = state.window;
    let Some(paddle) = state.paddle_mut(id) else {
        return;
    };
    if paddle.register_hit() {
        paddle.rect.set_center(Vec2::new(0.0, window.y * 2.0));
        log::info!("Mock paddle {} used up", id);
    }
}

/// Bricks already removed this pass no longer dispatch
fn brick_hit(state: &mut GameState, id: EntityId, other: Collider) {
    let Some(brick) = state.brick(id) else {
        return;
    };
    let hit = BrickHit {
        id,
        center: brick.rect.center(),
    };
    let strategy = brick.strategy.clone();
    strategy.on_collision(state, &hit, other);
}
