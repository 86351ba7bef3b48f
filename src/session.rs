//! Game session
//!
//! Owns the current [`GameState`] across restarts and talks to the [`Host`]
//! when a game ends.

use crate::host::{FrameInput, Host};
use crate::settings::Settings;
use crate::sim::{self, Collider, FrameReport, GamePhase, GameState};

/// Where the session stands after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Game still in progress
    Running,
    /// The game ended and the player chose to play again
    Restarted,
    /// The game ended and the window was closed
    Closed,
}

/// A sequence of games sharing one configuration
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    state: GameState,
    closed: bool,
}

impl Session {
    /// Start the first game. Uses the configured seed if there is one.
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        let state = GameState::new(&settings, seed);
        Self {
            settings,
            state,
            closed: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Collision filter for the host physics pass
    pub fn should_collide(&self, a: Collider, b: Collider) -> bool {
        sim::should_collide(&self.state, a, b)
    }

    /// Deliver one contact from the host physics pass
    pub fn on_contact(&mut self, a: Collider, b: Collider) {
        if self.closed {
            return;
        }
        sim::on_contact(&mut self.state, a, b);
    }

    /// Run the frame update. When the game ends, ask the player whether to
    /// play again.
    pub fn update<H: Host>(&mut self, host: &mut H, input: &FrameInput, dt: f32) -> SessionStatus {
        if self.closed {
            return SessionStatus::Closed;
        }

        let FrameReport { outcome, .. } = sim::update(&mut self.state, input, dt);
        let Some(outcome) = outcome else {
            return SessionStatus::Running;
        };

        if host.ask_yes_no(outcome.prompt()) {
            self.restart();
            SessionStatus::Restarted
        } else {
            log::info!("Closing after {:?}", outcome);
            host.close_window();
            self.closed = true;
            SessionStatus::Closed
        }
    }

    /// Throw away the current game and start a fresh one
    pub fn restart(&mut self) {
        let seed = self.state.next_game_seed();
        self.state = GameState::new(&self.settings, seed);
        self.closed = false;
        log::info!("Game restarted with seed: {}", seed);
    }

    pub fn is_playing(&self) -> bool {
        self.state.phase == GamePhase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_LIVES;

    const DT: f32 = 1.0 / 60.0;

    /// Answers prompts from a script and records what it was asked
    #[derive(Default)]
    struct ScriptedHost {
        answers: Vec<bool>,
        prompts: Vec<String>,
        closed: bool,
    }

    impl Host for ScriptedHost {
        fn ask_yes_no(&mut self, prompt: &str) -> bool {
            self.prompts.push(prompt.to_string());
            self.answers.remove(0)
        }

        fn close_window(&mut self) {
            self.closed = true;
        }
    }

    fn session() -> Session {
        Session::new(Settings {
            seed: Some(777),
            ..Default::default()
        })
    }

    fn win() -> FrameInput {
        FrameInput {
            force_win: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_running_frames_never_prompt() {
        let mut session = session();
        let mut host = ScriptedHost::default();
        for _ in 0..10 {
            assert_eq!(
                session.update(&mut host, &FrameInput::default(), DT),
                SessionStatus::Running
            );
        }
        assert!(host.prompts.is_empty());
        assert!(session.is_playing());
    }

    #[test]
    fn test_win_and_play_again() {
        let mut session = session();
        let first_seed = session.state().seed;
        let brick = session.state().bricks[0].id;
        let ball = Collider::Ball(session.state().main_ball);
        session.on_contact(ball, Collider::Brick(brick));

        let mut host = ScriptedHost {
            answers: vec![true],
            ..Default::default()
        };
        assert_eq!(session.update(&mut host, &win(), DT), SessionStatus::Restarted);
        assert_eq!(host.prompts, vec!["You win! Play again?"]);
        assert!(!host.closed);

        // Fresh game: full board, default lives, new seed
        let state = session.state();
        assert!(session.is_playing());
        assert_eq!(state.bricks_remaining, 56);
        assert_eq!(state.lives.count(), DEFAULT_LIVES);
        assert_eq!(state.frame, 0);
        assert_ne!(state.seed, first_seed);
    }

    #[test]
    fn test_loss_and_close() {
        let mut session = session();
        let mut host = ScriptedHost {
            answers: vec![false],
            ..Default::default()
        };

        let mut status = SessionStatus::Running;
        for _ in 0..DEFAULT_LIVES {
            let below = session.state().window.y + 5.0;
            let ball = session.state_mut().main_ball_mut().unwrap();
            ball.rect.set_center(glam::Vec2::new(100.0, below));
            status = session.update(&mut host, &FrameInput::default(), DT);
        }

        assert_eq!(status, SessionStatus::Closed);
        assert_eq!(host.prompts, vec!["You lose! Play again?"]);
        assert!(host.closed);
        assert!(session.is_closed());

        // Closed sessions ignore further frames
        assert_eq!(
            session.update(&mut host, &FrameInput::default(), DT),
            SessionStatus::Closed
        );
        assert_eq!(host.prompts.len(), 1);
    }

    #[test]
    fn test_restarts_are_reproducible() {
        let mut a = session();
        let mut b = session();
        a.restart();
        b.restart();
        assert_eq!(a.state().seed, b.state().seed);
        let strategies = |s: &Session| {
            s.state()
                .bricks
                .iter()
                .map(|b| b.strategy.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(strategies(&a), strategies(&b));
    }

    #[test]
    fn test_should_collide_delegates() {
        let session = session();
        let paddle = Collider::Paddle(session.state().original_paddle);
        assert!(session.should_collide(Collider::Heart(999), paddle));
        assert!(!session.should_collide(Collider::Heart(999), Collider::Border));
    }
}
