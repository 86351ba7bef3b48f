//! Brick collision strategies
//!
//! Every brick carries one [`CollisionStrategy`]. Leaf strategies all remove
//! the brick first (the basic effect) and then apply their own effect; a
//! composite runs both of its children in order.

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Ball, BallTag, Collider, EntityId, FallingHeart, GameState, Paddle, PaddleKind};
use crate::consts::*;

/// Kinds of leaf strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Basic,
    Puck,
    MockPaddle,
    Turbo,
    Heart,
}

/// Behavior of a brick when something hits it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionStrategy {
    /// Remove the brick
    Basic,
    /// Also release two puck balls
    Puck,
    /// Also spawn a mock paddle if none exists
    MockPaddle,
    /// Also speed up the main ball
    Turbo,
    /// Also drop a collectible heart
    Heart,
    /// Run both strategies in order
    Composite(Box<CollisionStrategy>, Box<CollisionStrategy>),
}

/// The brick side of a contact, captured before the brick is removed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickHit {
    pub id: EntityId,
    pub center: Vec2,
}

impl CollisionStrategy {
    pub fn composite(first: CollisionStrategy, second: CollisionStrategy) -> Self {
        CollisionStrategy::Composite(Box::new(first), Box::new(second))
    }

    /// Apply this strategy to a brick hit by `other`
    pub fn on_collision(&self, state: &mut GameState, brick: &BrickHit, other: Collider) {
        match self {
            CollisionStrategy::Basic => {
                remove_brick(state, brick);
            }
            CollisionStrategy::Puck => {
                remove_brick(state, brick);
                spawn_puck_balls(state, brick.center);
            }
            CollisionStrategy::MockPaddle => {
                remove_brick(state, brick);
                if !state.has_mock_paddle() {
                    spawn_mock_paddle(state);
                }
            }
            CollisionStrategy::Turbo => {
                remove_brick(state, brick);
                activate_turbo(state, other);
            }
            CollisionStrategy::Heart => {
                remove_brick(state, brick);
                spawn_falling_heart(state, brick.center);
            }
            CollisionStrategy::Composite(first, second) => {
                first.on_collision(state, brick, other);
                second.on_collision(state, brick, other);
            }
        }
    }

    /// Number of leaf effects in this tree
    pub fn leaf_count(&self) -> usize {
        match self {
            CollisionStrategy::Composite(a, b) => a.leaf_count() + b.leaf_count(),
            _ => 1,
        }
    }

    /// Composite nesting depth (0 for a leaf)
    pub fn depth(&self) -> usize {
        match self {
            CollisionStrategy::Composite(a, b) => 1 + a.depth().max(b.depth()),
            _ => 0,
        }
    }

    /// Leaf kinds in invocation order
    pub fn leaves(&self) -> Vec<StrategyKind> {
        let mut out = Vec::with_capacity(3);
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<StrategyKind>) {
        match self {
            CollisionStrategy::Basic => out.push(StrategyKind::Basic),
            CollisionStrategy::Puck => out.push(StrategyKind::Puck),
            CollisionStrategy::MockPaddle => out.push(StrategyKind::MockPaddle),
            CollisionStrategy::Turbo => out.push(StrategyKind::Turbo),
            CollisionStrategy::Heart => out.push(StrategyKind::Heart),
            CollisionStrategy::Composite(a, b) => {
                a.collect_leaves(out);
                b.collect_leaves(out);
            }
        }
    }
}

/// Basic effect: the brick counter only drops if the brick was still there
fn remove_brick(state: &mut GameState, brick: &BrickHit) {
    if state.remove_brick(brick.id) {
        state.bricks_remaining = state.bricks_remaining.saturating_sub(1);
        log::debug!("Brick {} removed, {} left", brick.id, state.bricks_remaining);
    }
}

fn spawn_puck_balls(state: &mut GameState, center: Vec2) {
    let size = BALL_SIZE * PUCK_BALL_RATIO;
    for _ in 0..2 {
        let angle = state.rng.random::<f32>() * PI;
        let id = state.next_entity_id();
        let mut puck = Ball::new(id, center, size, BallTag::Puck);
        puck.vel = Vec2::new(angle.cos(), angle.sin()) * state.ball_speed;
        state.balls.push(puck);
    }
}

fn spawn_mock_paddle(state: &mut GameState) {
    let id = state.next_entity_id();
    let center = state.window / 2.0;
    state.paddles.push(Paddle::new(id, center, PaddleKind::Mock { hits: 0 }));
    log::info!("Mock paddle {} spawned", id);
}

/// Only the main ball in its normal state goes turbo
fn activate_turbo(state: &mut GameState, other: Collider) {
    let Collider::Ball(ball_id) = other else {
        return;
    };
    if let Some(ball) = state.ball_mut(ball_id) {
        if ball.tag == BallTag::Main {
            ball.enter_turbo();
            log::info!("Turbo on for ball {}", ball_id);
        }
    }
}

fn spawn_falling_heart(state: &mut GameState, center: Vec2) {
    let id = state.next_entity_id();
    state.hearts.push(FallingHeart::new(id, center));
}
