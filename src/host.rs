//! Host runtime seam
//!
//! The embedding game loop owns the window, rendering, asset readers and the
//! physics pass. Per frame it reports contacts through
//! [`crate::Session::on_contact`], then calls [`crate::Session::update`] with
//! the current [`FrameInput`] and a [`Host`] for the end-of-game dialog.

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Move paddles left
    pub left: bool,
    /// Move paddles right
    pub right: bool,
    /// Win immediately (debug)
    pub force_win: bool,
}

impl FrameInput {
    /// Horizontal steering direction (-1, 0 or 1)
    pub fn steering(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Services the host provides to the core
pub trait Host {
    /// Show a blocking yes/no dialog and return the answer
    fn ask_yes_no(&mut self, prompt: &str) -> bool;

    /// Close the game window and end the process loop
    fn close_window(&mut self);
}
