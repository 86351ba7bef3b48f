//! Per-frame lifecycle update
//!
//! Runs once per frame after the host physics pass has delivered its
//! contacts. Finalizes time-boxed effects and decides whether the game ended.

use super::lives::LifeLoss;
use super::state::{GameOutcome, GamePhase, GameState};
use super::turbo::TurboTransition;
use crate::host::FrameInput;

/// What happened during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Set on the frame the game ends
    pub outcome: Option<GameOutcome>,
    /// The main ball fell past the bottom of the window
    pub ball_lost: bool,
    /// Entities removed by the off-screen sweep
    pub swept: usize,
    pub turbo: Option<TurboTransition>,
    pub heart_captured: bool,
}

/// Advance the game by one frame
pub fn update(state: &mut GameState, input: &FrameInput, dt: f32) -> FrameReport {
    let mut report = FrameReport::default();

    // Nothing moves once the game is decided
    if let GamePhase::Over(_) = state.phase {
        return report;
    }
    state.frame += 1;

    steer_paddles(state, input, dt);

    // Terminal check. A fallen main ball is recentered right away so the
    // sweep below never collects it.
    let won = state.bricks_remaining == 0 || input.force_win;
    report.ball_lost = state
        .main_ball()
        .is_some_and(|ball| ball.rect.center().y > state.window.y);
    if report.ball_lost {
        state.recenter_main_ball();
    }

    report.swept = sweep_off_screen(state);
    report.turbo = step_turbo(state);
    report.heart_captured = capture_heart(state);

    let mut lost = false;
    if report.ball_lost {
        match state.lives.lose_life() {
            LifeLoss::Remaining(left) => log::info!("Ball lost, {} lives left", left),
            LifeLoss::Depleted => lost = true,
        }
    }

    report.outcome = if lost {
        Some(GameOutcome::Lost)
    } else if won {
        Some(GameOutcome::Won)
    } else {
        None
    };
    if let Some(outcome) = report.outcome {
        log::info!("Game over: {:?} after {} frames", outcome, state.frame);
        state.phase = GamePhase::Over(outcome);
    }

    // Ensure deterministic ordering
    state.normalize_order();
    report
}

/// Every paddle follows the same input
fn steer_paddles(state: &mut GameState, input: &FrameInput, dt: f32) {
    let direction = input.steering();
    let width = state.window.x;
    for paddle in &mut state.paddles {
        paddle.steer(direction, dt, width);
    }
}

/// Remove every ball, paddle and heart whose center is below the window
fn sweep_off_screen(state: &mut GameState) -> usize {
    let bottom = state.window.y;
    let before = state.balls.len() + state.paddles.len() + state.hearts.len();

    state.balls.retain(|b| b.rect.center().y <= bottom);
    state.paddles.retain(|p| p.rect.center().y <= bottom);
    state.hearts.retain(|h| h.rect.center().y <= bottom);

    let swept = before - (state.balls.len() + state.paddles.len() + state.hearts.len());
    if swept > 0 {
        log::debug!("Swept {} off-screen entities", swept);
    }
    swept
}

fn step_turbo(state: &mut GameState) -> Option<TurboTransition> {
    let GameState {
        turbo,
        balls,
        main_ball,
        ..
    } = state;
    let ball = balls.iter_mut().find(|b| b.id == *main_ball)?;
    let transition = turbo.step(ball);
    match transition {
        Some(TurboTransition::Armed { deadline }) => {
            log::debug!("Turbo ends at collision {}", deadline)
        }
        Some(TurboTransition::Expired) => log::info!("Turbo off"),
        None => {}
    }
    transition
}

/// Capture at most one falling heart touching the original paddle
fn capture_heart(state: &mut GameState) -> bool {
    let Some(paddle) = state.original_paddle().map(|p| p.rect) else {
        return false;
    };
    let Some(index) = state.hearts.iter().position(|h| h.rect.overlaps(&paddle)) else {
        return false;
    };

    let heart = state.hearts.remove(index);
    let added = state.lives.add_life();
    log::info!(
        "Heart {} captured, lives {}{}",
        heart.id,
        state.lives.count(),
        if added { "" } else { " (full)" }
    );
    true
}
