//! Turbo timer
//!
//! Turbo lasts a fixed number of ball collisions rather than wall-clock time.
//! A turbo brick only retags the ball; the timer notices the tag on the next
//! frame, arms a deadline in collision counts and reverts the ball when the
//! count equals it.

use super::state::{Ball, BallTag};
use crate::consts::TURBO_COLLISIONS;

/// Turbo deadline held by the frame update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurboTimer {
    /// No deadline armed
    #[default]
    Idle,
    /// Turbo ends when the ball's collision count reaches `deadline`
    Armed { deadline: u32 },
}

/// What a timer step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurboTransition {
    Armed { deadline: u32 },
    Expired,
}

impl TurboTimer {
    pub fn deadline(&self) -> Option<u32> {
        match self {
            TurboTimer::Idle => None,
            TurboTimer::Armed { deadline } => Some(*deadline),
        }
    }

    /// Advance the timer for the main ball
    pub fn step(&mut self, ball: &mut Ball) -> Option<TurboTransition> {
        match *self {
            TurboTimer::Idle if ball.tag == BallTag::Turbo => {
                let deadline = ball.collision_count + TURBO_COLLISIONS;
                *self = TurboTimer::Armed { deadline };
                Some(TurboTransition::Armed { deadline })
            }
            // Exact match only; a count that skipped past the deadline keeps turbo
            TurboTimer::Armed { deadline }
                if ball.collision_count != 0 && ball.collision_count == deadline =>
            {
                ball.leave_turbo();
                *self = TurboTimer::Idle;
                Some(TurboTransition::Expired)
            }
            _ => None,
        }
    }
}
