//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies
//!
//! The host physics pass reports contacts through [`on_contact`], then the
//! game loop calls [`update`] once per frame.

pub mod board;
pub mod contact;
pub mod factory;
pub mod lives;
pub mod rect;
pub mod state;
pub mod strategy;
pub mod tick;
pub mod turbo;

pub use board::{BoardSummary, brick_width, generate_board};
pub use contact::{on_contact, should_collide};
pub use factory::StrategyFactory;
pub use lives::{LabelColor, LifeLoss, LivesLabel, LivesState};
pub use rect::Rect;
pub use state::{
    Ball, BallTag, Brick, Collider, EntityId, FallingHeart, GameOutcome, GamePhase, GameState,
    Paddle, PaddleKind, Skin, asset_paths,
};
pub use strategy::{BrickHit, CollisionStrategy, StrategyKind};
pub use tick::{FrameReport, update};
pub use turbo::{TurboTimer, TurboTransition};
