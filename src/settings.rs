//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to the
//! compile-time default in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};

/// Brick grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub bricks_per_row: u32,
    pub rows: u32,
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            bricks_per_row: DEFAULT_BRICKS_PER_ROW,
            rows: DEFAULT_BRICK_ROWS,
        }
    }
}

impl BoardSize {
    /// Total bricks on the board, or `None` if the grid is empty or larger
    /// than [`MAX_BRICKS`]
    pub fn brick_count(&self) -> Option<u32> {
        self.bricks_per_row
            .checked_mul(self.rows)
            .filter(|n| (1..=MAX_BRICKS).contains(n))
    }

    /// Parse the process arguments (program name excluded).
    ///
    /// Exactly two positive integers select the grid; any other argument
    /// count, a value that is not a positive integer, or a grid over
    /// [`MAX_BRICKS`] yields the default.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if args.len() != 2 {
            return Self::default();
        }

        let parse = |s: &S| s.as_ref().trim().parse::<u32>().ok().filter(|n| *n > 0);
        let board = match (parse(&args[0]), parse(&args[1])) {
            (Some(bricks_per_row), Some(rows)) => Self {
                bricks_per_row,
                rows,
            },
            _ => {
                log::warn!("Ignoring malformed board arguments, using defaults");
                return Self::default();
            }
        };
        if board.brick_count().is_none() {
            log::warn!("Board {}x{} too large, using defaults", board.bricks_per_row, board.rows);
            return Self::default();
        }
        board
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window width in pixels
    pub window_width: f32,
    /// Window height in pixels
    pub window_height: f32,
    /// Brick grid
    pub board: BoardSize,
    /// Speed of the main ball and puck balls (pixels/s)
    pub ball_speed: f32,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            board: BoardSize::default(),
            ball_speed: BALL_SPEED,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings from a JSON string (missing keys take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "window",
                reason: "width and height must be positive",
            });
        }
        if self.board.brick_count().is_none() {
            return Err(ConfigError::Invalid {
                field: "board",
                reason: "must hold between 1 and 10000 bricks",
            });
        }
        if !(self.ball_speed > 0.0) {
            return Err(ConfigError::Invalid {
                field: "ball_speed",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Window dimensions as a vector
    pub fn window(&self) -> Vec2 {
        Vec2::new(self.window_width, self.window_height)
    }
}
