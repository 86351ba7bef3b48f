//! Axis-aligned rectangle geometry for every entity
//!
//! Window coordinates: (0, 0) is the top-left corner and y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub top_left: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(top_left: Vec2, size: Vec2) -> Self {
        Self { top_left, size }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            top_left: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.top_left + self.size / 2.0
    }

    /// Move the rectangle so its center lands on `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.top_left = center - self.size / 2.0;
    }

    /// Bottom-right corner
    #[inline]
    pub fn bottom_right(&self) -> Vec2 {
        self.top_left + self.size
    }

    /// Closed-interval overlap on both axes (touching edges count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.bottom_right();
        let b_max = other.bottom_right();
        self.top_left.x <= b_max.x
            && other.top_left.x <= a_max.x
            && self.top_left.y <= b_max.y
            && other.top_left.y <= a_max.y
    }

    /// Shift horizontally so the rectangle stays within `[min_x, max_x]`
    pub fn clamp_x(&mut self, min_x: f32, max_x: f32) {
        if self.top_left.x < min_x {
            self.top_left.x = min_x;
        }
        if self.top_left.x + self.size.x > max_x {
            self.top_left.x = max_x - self.size.x;
        }
    }
}
