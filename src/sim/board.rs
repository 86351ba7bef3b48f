//! Brick board generation

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::factory::StrategyFactory;
use super::rect::Rect;
use super::state::{Brick, GameState, Skin};
use super::strategy::{CollisionStrategy, StrategyKind};
use crate::consts::*;
use crate::settings::BoardSize;

/// Brick width that fits `bricks_per_row` bricks between the borders
pub fn brick_width(window_width: f32, bricks_per_row: u32) -> f32 {
    let per_row = bricks_per_row.max(1) as f32;
    let usable = window_width - 2.0 * BORDER_LENGTH - 2.0 * BRICK_PADDING;
    usable / per_row - BRICK_PADDING + BRICK_PADDING / per_row
}

/// Fill the board with bricks, drawing a strategy for each from the game RNG.
/// Resets the brick counter to the number of bricks placed.
/// Boards outside the accepted size fall back to the default grid.
pub fn generate_board(state: &mut GameState) {
    let count = match state.board.brick_count() {
        Some(count) => count as usize,
        None => {
            log::warn!(
                "Board {}x{} out of range, using defaults",
                state.board.bricks_per_row,
                state.board.rows
            );
            state.board = BoardSize::default();
            (DEFAULT_BRICKS_PER_ROW * DEFAULT_BRICK_ROWS) as usize
        }
    };
    let width = brick_width(state.window.x, state.board.bricks_per_row);

    let factory_seed: u64 = state.rng.random();
    let mut factory = StrategyFactory::new(Pcg32::seed_from_u64(factory_seed));
    let mut strategies = (0..count).map(|_| factory.create_strategy());

    state.bricks.clear();
    state.bricks_remaining = 0;

    let mut y = BORDER_LENGTH + BRICK_PADDING;
    for _row in 0..state.board.rows {
        let mut x = BORDER_LENGTH + BRICK_PADDING;
        for _col in 0..state.board.bricks_per_row {
            let Some(strategy) = strategies.next() else {
                break;
            };
            let id = state.next_entity_id();
            state.bricks.push(Brick {
                id,
                rect: Rect::new(Vec2::new(x, y), Vec2::new(width, BRICK_HEIGHT)),
                strategy,
                skin: Skin::Brick,
            });
            state.bricks_remaining += 1;
            // Whole-pixel stepping between columns
            x += (width + BRICK_PADDING).trunc();
        }
        y += BRICK_HEIGHT + BRICK_PADDING / 2.0;
    }

    let summary = BoardSummary::of(state);
    log::info!(
        "Board {}x{}: {} bricks, {} basic, {} single, {} pairs, {} triples",
        state.board.bricks_per_row,
        state.board.rows,
        summary.bricks,
        summary.basic,
        summary.single,
        summary.pairs,
        summary.triples
    );
}

/// Census of the strategies on a board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub bricks: usize,
    pub basic: usize,
    /// Single special effect
    pub single: usize,
    /// Two effects
    pub pairs: usize,
    /// Three effects
    pub triples: usize,
    /// How often each special effect appears across all bricks
    pub puck: usize,
    pub mock_paddle: usize,
    pub turbo: usize,
    pub heart: usize,
}

impl BoardSummary {
    pub fn of(state: &GameState) -> Self {
        let mut summary = Self {
            bricks: state.bricks.len(),
            ..Default::default()
        };
        for brick in &state.bricks {
            match (&brick.strategy, brick.strategy.leaf_count()) {
                (CollisionStrategy::Basic, _) => summary.basic += 1,
                (_, 1) => summary.single += 1,
                (_, 2) => summary.pairs += 1,
                _ => summary.triples += 1,
            }
            for kind in brick.strategy.leaves() {
                match kind {
                    StrategyKind::Basic => {}
                    StrategyKind::Puck => summary.puck += 1,
                    StrategyKind::MockPaddle => summary.mock_paddle += 1,
                    StrategyKind::Turbo => summary.turbo += 1,
                    StrategyKind::Heart => summary.heart += 1,
                }
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_brick_width_default_board() {
        // (700 - 6 - 30) / 8 - 15 + 15 / 8
        let width = brick_width(700.0, 8);
        assert!((width - 69.875).abs() < 1e-3);
    }

    #[test]
    fn test_board_fits_inside_borders() {
        let state = GameState::new(&Settings::default(), 3);
        assert_eq!(state.bricks.len(), 56);
        for brick in &state.bricks {
            assert!(brick.rect.top_left.x >= BORDER_LENGTH);
            assert!(brick.rect.bottom_right().x <= state.window.x - BORDER_LENGTH);
        }
        let first = &state.bricks[0];
        assert_eq!(first.rect.top_left, Vec2::new(18.0, 18.0));
        let second_row = &state.bricks[8];
        assert_eq!(second_row.rect.top_left.y, 18.0 + 22.5);
    }

    #[test]
    fn test_custom_board_size() {
        let settings = Settings {
            board: BoardSize {
                bricks_per_row: 3,
                rows: 2,
            },
            ..Default::default()
        };
        let state = GameState::new(&settings, 11);
        assert_eq!(state.bricks.len(), 6);
        assert_eq!(state.bricks_remaining, 6);
    }

    #[test]
    fn test_oversized_board_uses_default() {
        let settings = Settings {
            board: BoardSize {
                bricks_per_row: 70_000,
                rows: 70_000,
            },
            ..Default::default()
        };
        let state = GameState::new(&settings, 8);
        assert_eq!(state.board, BoardSize::default());
        assert_eq!(state.bricks.len(), 56);
        assert_eq!(state.bricks_remaining, 56);
    }

    #[test]
    fn test_summary_counts_every_brick() {
        let settings = Settings {
            board: BoardSize {
                bricks_per_row: 20,
                rows: 20,
            },
            ..Default::default()
        };
        let state = GameState::new(&settings, 2024);
        let summary = BoardSummary::of(&state);
        assert_eq!(summary.bricks, 400);
        assert_eq!(
            summary.basic + summary.single + summary.pairs + summary.triples,
            400
        );
        let leaves = summary.single + 2 * summary.pairs + 3 * summary.triples;
        assert_eq!(
            summary.puck + summary.mock_paddle + summary.turbo + summary.heart,
            leaves
        );
        assert!(summary.basic > 150 && summary.basic < 250);
    }
}
