//! Game state and entity types
//!
//! A single [`GameState`] owns the brick counter, the lives, the turbo timer
//! and every entity collection. Contact handlers and the frame update receive
//! it explicitly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::generate_board;
use super::lives::LivesState;
use super::rect::Rect;
use super::strategy::CollisionStrategy;
use super::turbo::TurboTimer;
use crate::consts::*;
use crate::settings::{BoardSize, Settings};

/// Entity identifier, unique within one game
pub type EntityId = u32;

/// Image asset an entity is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skin {
    Ball,
    TurboBall,
    PuckBall,
    Paddle,
    Heart,
    Brick,
}

impl Skin {
    /// Asset path the host's image reader loads for this skin
    pub fn image_path(&self) -> &'static str {
        match self {
            Skin::Ball => "assets/ball.png",
            Skin::TurboBall => "assets/redball.png",
            Skin::PuckBall => "assets/mockBall.png",
            Skin::Paddle => "assets/paddle.png",
            Skin::Heart => "assets/heart.png",
            Skin::Brick => "assets/brick.png",
        }
    }

    pub const ALL: [Skin; 6] = [
        Skin::Ball,
        Skin::TurboBall,
        Skin::PuckBall,
        Skin::Paddle,
        Skin::Heart,
        Skin::Brick,
    ];
}

/// Every asset path the host must be able to load: entity images, the
/// background image and the ball collision sound
pub fn asset_paths() -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = Skin::ALL.iter().map(Skin::image_path).collect();
    paths.push(BACKGROUND_IMAGE_PATH);
    paths.push(BALL_COLLISION_SOUND_PATH);
    paths
}

/// Ball identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallTag {
    /// The player's ball in its normal state
    Main,
    /// The player's ball while turbo is active
    Turbo,
    /// Extra ball spawned by a puck brick
    Puck,
}

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub id: EntityId,
    pub rect: Rect,
    pub vel: Vec2,
    pub tag: BallTag,
    /// Contacts this ball has entered (never decreases)
    pub collision_count: u32,
    pub skin: Skin,
}

impl Ball {
    pub fn new(id: EntityId, center: Vec2, size: f32, tag: BallTag) -> Self {
        let skin = match tag {
            BallTag::Main => Skin::Ball,
            BallTag::Turbo => Skin::TurboBall,
            BallTag::Puck => Skin::PuckBall,
        };
        Self {
            id,
            rect: Rect::from_center(center, Vec2::splat(size)),
            vel: Vec2::ZERO,
            tag,
            collision_count: 0,
            skin,
        }
    }

    /// Record a contact
    pub fn register_collision(&mut self) {
        self.collision_count += 1;
    }

    /// Speed the ball up and mark it as turbo
    pub fn enter_turbo(&mut self) {
        self.tag = BallTag::Turbo;
        self.vel *= TURBO_SPEED_MULTIPLIER;
        self.skin = Skin::TurboBall;
    }

    /// Undo [`Ball::enter_turbo`]
    pub fn leave_turbo(&mut self) {
        self.tag = BallTag::Main;
        self.vel /= TURBO_SPEED_MULTIPLIER;
        self.skin = Skin::Ball;
    }
}

/// Paddle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleKind {
    /// The player's paddle at the bottom of the window
    Original,
    /// Temporary paddle that vanishes after a few hits
    Mock { hits: u32 },
}

/// A paddle entity
#[derive(Debug, Clone)]
pub struct Paddle {
    pub id: EntityId,
    pub rect: Rect,
    pub kind: PaddleKind,
    pub skin: Skin,
}

impl Paddle {
    /// Paddle of the standard size centered on `center`
    pub fn new(id: EntityId, center: Vec2, kind: PaddleKind) -> Self {
        Self {
            id,
            rect: Rect::from_center(center, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT)),
            kind,
            skin: Skin::Paddle,
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.kind, PaddleKind::Mock { .. })
    }

    /// Move with the player's input, staying inside the side borders
    pub fn steer(&mut self, direction: f32, dt: f32, window_width: f32) {
        self.rect.top_left.x += direction * PADDLE_SPEED * dt;
        self.rect
            .clamp_x(BORDER_LENGTH + 1.0, window_width - BORDER_LENGTH);
    }

    /// Count a hit on a mock paddle. Returns true when it has absorbed its
    /// last hit; the original paddle never expires.
    pub fn register_hit(&mut self) -> bool {
        match &mut self.kind {
            PaddleKind::Original => false,
            PaddleKind::Mock { hits } => {
                *hits += 1;
                *hits == MOCK_PADDLE_MAX_HITS
            }
        }
    }
}

/// A collectible heart falling toward the paddle
#[derive(Debug, Clone)]
pub struct FallingHeart {
    pub id: EntityId,
    pub rect: Rect,
    pub vel: Vec2,
    pub skin: Skin,
}

impl FallingHeart {
    pub fn new(id: EntityId, center: Vec2) -> Self {
        Self {
            id,
            rect: Rect::from_center(center, Vec2::splat(HEART_SIZE)),
            vel: Vec2::new(0.0, HEART_FALL_SPEED),
            skin: Skin::Heart,
        }
    }
}

/// A brick bound to its collision strategy for its whole lifetime
#[derive(Debug, Clone)]
pub struct Brick {
    pub id: EntityId,
    pub rect: Rect,
    pub strategy: CollisionStrategy,
    pub skin: Skin,
}

/// One side of a contact reported by the host physics pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collider {
    Ball(EntityId),
    Paddle(EntityId),
    Brick(EntityId),
    Heart(EntityId),
    Border,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Lost,
}

impl GameOutcome {
    /// End-of-game dialog text
    pub fn prompt(&self) -> &'static str {
        match self {
            GameOutcome::Won => "You win! Play again?",
            GameOutcome::Lost => "You lose! Play again?",
        }
    }
}

/// Current phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Over(GameOutcome),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this game was built from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Window dimensions
    pub window: Vec2,
    pub board: BoardSize,
    pub ball_speed: f32,
    pub phase: GamePhase,
    /// Bricks still on the board
    pub bricks_remaining: u32,
    pub lives: LivesState,
    pub turbo: TurboTimer,
    pub main_ball: EntityId,
    pub original_paddle: EntityId,
    /// Active balls (sorted by id)
    pub balls: Vec<Ball>,
    /// Active paddles (sorted by id)
    pub paddles: Vec<Paddle>,
    /// Falling hearts (sorted by id)
    pub hearts: Vec<FallingHeart>,
    /// Bricks on the board (sorted by id)
    pub bricks: Vec<Brick>,
    /// Frames updated so far
    pub frame: u64,
    next_id: u32,
}

impl GameState {
    /// Build a full game: ball, paddle, lives and a freshly generated board
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let window = settings.window();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            window,
            board: settings.board,
            ball_speed: settings.ball_speed,
            phase: GamePhase::Playing,
            bricks_remaining: 0,
            lives: LivesState::new(window),
            turbo: TurboTimer::default(),
            main_ball: 0,
            original_paddle: 0,
            balls: Vec::new(),
            paddles: Vec::new(),
            hearts: Vec::new(),
            bricks: Vec::new(),
            frame: 0,
            next_id: 1,
        };

        state.main_ball = state.next_entity_id();
        state
            .balls
            .push(Ball::new(state.main_ball, window / 2.0, BALL_SIZE, BallTag::Main));
        state.recenter_main_ball();

        state.original_paddle = state.next_entity_id();
        let paddle_center = Vec2::new(window.x / 2.0, window.y - PADDLE_BOTTOM_OFFSET);
        state
            .paddles
            .push(Paddle::new(state.original_paddle, paddle_center, PaddleKind::Original));

        generate_board(&mut state);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn ball(&self, id: EntityId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn ball_mut(&mut self, id: EntityId) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id)
    }

    pub fn main_ball(&self) -> Option<&Ball> {
        self.ball(self.main_ball)
    }

    pub fn main_ball_mut(&mut self) -> Option<&mut Ball> {
        let id = self.main_ball;
        self.ball_mut(id)
    }

    pub fn paddle(&self, id: EntityId) -> Option<&Paddle> {
        self.paddles.iter().find(|p| p.id == id)
    }

    pub fn paddle_mut(&mut self, id: EntityId) -> Option<&mut Paddle> {
        self.paddles.iter_mut().find(|p| p.id == id)
    }

    pub fn original_paddle(&self) -> Option<&Paddle> {
        self.paddle(self.original_paddle)
    }

    pub fn brick(&self, id: EntityId) -> Option<&Brick> {
        self.bricks.iter().find(|b| b.id == id)
    }

    pub fn has_mock_paddle(&self) -> bool {
        self.paddles.iter().any(Paddle::is_mock)
    }

    /// Remove a brick from the board. Returns false if it was already gone.
    pub fn remove_brick(&mut self, id: EntityId) -> bool {
        match self.bricks.iter().position(|b| b.id == id) {
            Some(index) => {
                self.bricks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Put the main ball back in the middle of the window with a random
    /// diagonal velocity
    pub fn recenter_main_ball(&mut self) {
        let speed = self.ball_speed;
        let vx = if self.rng.random_bool(0.5) { -speed } else { speed };
        let vy = if self.rng.random_bool(0.5) { -speed } else { speed };
        let center = self.window / 2.0;
        if let Some(ball) = self.main_ball_mut() {
            ball.rect.set_center(center);
            ball.vel = Vec2::new(vx, vy);
        }
    }

    /// Draw a seed for the next game from this game's RNG
    pub fn next_game_seed(&mut self) -> u64 {
        self.rng.random()
    }

    /// Ensure entity collections are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.balls.sort_by_key(|b| b.id);
        self.paddles.sort_by_key(|p| p.id);
        self.hearts.sort_by_key(|h| h.id);
        self.bricks.sort_by_key(|b| b.id);
    }
}
