//! Player lives and their HUD mirror
//!
//! The count is mirrored by a row of heart icons (newest last) and a colored
//! numeric label in the bottom-left corner of the window.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Color of the numeric lives label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelColor {
    Red,
    Yellow,
    Green,
}

impl LabelColor {
    pub fn for_lives(lives: u8) -> Self {
        match lives {
            0 | 1 => LabelColor::Red,
            2 => LabelColor::Yellow,
            _ => LabelColor::Green,
        }
    }
}

/// Numeric lives label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivesLabel {
    pub text: String,
    pub color: LabelColor,
}

/// Result of losing a life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeLoss {
    /// Lives remain
    Remaining(u8),
    /// That was the last one
    Depleted,
}

/// Life count with its heart icons and label
#[derive(Debug, Clone)]
pub struct LivesState {
    count: u8,
    icons: Vec<Rect>,
    label: LivesLabel,
    label_rect: Rect,
    icon_y: f32,
    next_icon_x: f32,
}

impl LivesState {
    /// Fresh lives at the default count
    pub fn new(window: Vec2) -> Self {
        let mut lives = Self {
            count: 0,
            icons: Vec::with_capacity(MAX_LIVES as usize),
            label: LivesLabel {
                text: "0".to_string(),
                color: LabelColor::Red,
            },
            label_rect: Rect::new(
                Vec2::new(LIVES_LABEL_X, window.y - LIVES_LABEL_BOTTOM_OFFSET),
                Vec2::splat(LIVES_LABEL_SIZE),
            ),
            icon_y: window.y - HEART_ICON_BOTTOM_OFFSET,
            next_icon_x: LIVES_LABEL_X + LIVES_LABEL_SIZE + HEART_ICON_PADDING,
        };
        for _ in 0..DEFAULT_LIVES {
            lives.add_life();
        }
        lives
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    /// Heart icons, oldest first
    pub fn icons(&self) -> &[Rect] {
        &self.icons
    }

    pub fn label(&self) -> &LivesLabel {
        &self.label
    }

    pub fn label_rect(&self) -> Rect {
        self.label_rect
    }

    /// Add a life unless already at the cap. Returns whether one was added.
    pub fn add_life(&mut self) -> bool {
        if self.count >= MAX_LIVES {
            return false;
        }
        self.icons.push(Rect::new(
            Vec2::new(self.next_icon_x, self.icon_y),
            Vec2::splat(HEART_SIZE),
        ));
        self.next_icon_x += HEART_ICON_PADDING + HEART_SIZE;
        self.count += 1;
        self.sync_label();
        true
    }

    /// Lose a life. On the last one the newest icon is left in place.
    pub fn lose_life(&mut self) -> LifeLoss {
        self.count = self.count.saturating_sub(1);
        self.sync_label();
        if self.count == 0 {
            return LifeLoss::Depleted;
        }
        if self.icons.pop().is_some() {
            self.next_icon_x -= HEART_ICON_PADDING + HEART_SIZE;
        }
        LifeLoss::Remaining(self.count)
    }

    fn sync_label(&mut self) {
        self.label.text = self.count.to_string();
        self.label.color = LabelColor::for_lives(self.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn window() -> Vec2 {
        Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }

    #[test]
    fn test_default_lives() {
        let lives = LivesState::new(window());
        assert_eq!(lives.count(), 3);
        assert_eq!(lives.icons().len(), 3);
        assert_eq!(lives.label().text, "3");
        assert_eq!(lives.label().color, LabelColor::Green);
        // First icon sits right after the label
        assert_eq!(lives.icons()[0].top_left, Vec2::new(32.0, 478.0));
        assert_eq!(lives.icons()[1].top_left.x, 56.0);
    }

    #[test]
    fn test_label_sits_left_of_icons() {
        let lives = LivesState::new(window());
        let label = lives.label_rect();
        assert_eq!(label.top_left, Vec2::new(10.0, 479.0));
        assert_eq!(label.size, Vec2::splat(15.0));
        assert!(label.bottom_right().x < lives.icons()[0].top_left.x);
    }

    #[test]
    fn test_add_life_capped() {
        let mut lives = LivesState::new(window());
        assert!(lives.add_life());
        assert_eq!(lives.count(), MAX_LIVES);
        assert!(!lives.add_life());
        assert_eq!(lives.count(), MAX_LIVES);
        assert_eq!(lives.icons().len(), MAX_LIVES as usize);
    }

    #[test]
    fn test_label_colors() {
        assert_eq!(LabelColor::for_lives(0), LabelColor::Red);
        assert_eq!(LabelColor::for_lives(1), LabelColor::Red);
        assert_eq!(LabelColor::for_lives(2), LabelColor::Yellow);
        assert_eq!(LabelColor::for_lives(3), LabelColor::Green);
        assert_eq!(LabelColor::for_lives(4), LabelColor::Green);
    }

    #[test]
    fn test_lose_to_zero_keeps_last_icon() {
        let mut lives = LivesState::new(window());
        assert_eq!(lives.lose_life(), LifeLoss::Remaining(2));
        assert_eq!(lives.label().color, LabelColor::Yellow);
        assert_eq!(lives.lose_life(), LifeLoss::Remaining(1));
        assert_eq!(lives.label().color, LabelColor::Red);
        assert_eq!(lives.icons().len(), 1);

        assert_eq!(lives.lose_life(), LifeLoss::Depleted);
        assert_eq!(lives.count(), 0);
        assert_eq!(lives.label().text, "0");
        assert_eq!(lives.icons().len(), 1);
    }

    #[test]
    fn test_icon_slot_reused_after_loss() {
        let mut lives = LivesState::new(window());
        let third = lives.icons()[2];
        lives.lose_life();
        lives.add_life();
        assert_eq!(lives.icons()[2], third);
    }

    proptest! {
        #[test]
        fn prop_lives_stay_in_bounds(ops in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut lives = LivesState::new(window());
            for add in ops {
                if add {
                    lives.add_life();
                } else if lives.lose_life() == LifeLoss::Depleted {
                    break;
                }
                prop_assert!(lives.count() <= MAX_LIVES);
                prop_assert_eq!(lives.label().text.clone(), lives.count().to_string());
            }
        }
    }
}
