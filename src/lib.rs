//! Bricker - a brick breaker arcade game core
//!
//! Core modules:
//! - `sim`: Collision strategies, entity state and the per-frame lifecycle
//! - `session`: Game session driving restarts through the host
//! - `host`: Services the embedding game loop provides to the core
//! - `settings`: Data-driven game configuration
//! - `error`: Configuration errors

pub mod error;
pub mod host;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, ConfigResult};
pub use host::{FrameInput, Host};
pub use session::{Session, SessionStatus};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 700.0;
    pub const WINDOW_HEIGHT: f32 = 500.0;
    /// Width of the left, right and top borders
    pub const BORDER_LENGTH: f32 = 3.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 200.0;
    /// Puck balls are this fraction of the main ball
    pub const PUCK_BALL_RATIO: f32 = 0.75;

    /// Turbo velocity multiplier
    pub const TURBO_SPEED_MULTIPLIER: f32 = 1.4;
    /// Ball collisions a turbo lasts
    pub const TURBO_COLLISIONS: u32 = 6;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Distance of the paddle center from the bottom of the window
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;
    pub const PADDLE_SPEED: f32 = 350.0;
    /// Hits a mock paddle absorbs before it disappears
    pub const MOCK_PADDLE_MAX_HITS: u32 = 4;

    /// Falling heart defaults
    pub const HEART_SIZE: f32 = 17.0;
    pub const HEART_FALL_SPEED: f32 = 100.0;

    /// Lives
    pub const MAX_LIVES: u8 = 4;
    pub const DEFAULT_LIVES: u8 = 3;

    /// Brick grid defaults
    pub const DEFAULT_BRICKS_PER_ROW: u32 = 8;
    pub const DEFAULT_BRICK_ROWS: u32 = 7;
    /// Largest board accepted from arguments or settings
    pub const MAX_BRICKS: u32 = 10_000;
    pub const BRICK_HEIGHT: f32 = 15.0;
    pub const BRICK_PADDING: f32 = 15.0;

    /// Lives HUD layout
    pub const LIVES_LABEL_X: f32 = 10.0;
    pub const LIVES_LABEL_BOTTOM_OFFSET: f32 = 21.0;
    pub const LIVES_LABEL_SIZE: f32 = 15.0;
    pub const HEART_ICON_BOTTOM_OFFSET: f32 = 22.0;
    pub const HEART_ICON_PADDING: f32 = 7.0;

    /// Sound the host plays when a ball collides
    pub const BALL_COLLISION_SOUND_PATH: &str = "assets/blop.wav";
    pub const BACKGROUND_IMAGE_PATH: &str = "assets/DARK_BG2_small.jpeg";
}
