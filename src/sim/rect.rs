//! Axis-aligned rectangles for paddles and the ball's bounding box
//!
//! Screen-style coordinates: x grows right, y grows down, so `top` is the
//! smaller y value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box stored as center + size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Move so the left edge sits at `x`
    pub fn set_left(&mut self, x: f32) {
        self.center.x = x + self.size.x / 2.0;
    }

    /// Move so the right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.center.x = x - self.size.x / 2.0;
    }

    /// Move so the top edge sits at `y`
    pub fn set_top(&mut self, y: f32) {
        self.center.y = y + self.size.y / 2.0;
    }

    /// Move so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.center.y = y - self.size.y / 2.0;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Strict overlap test; boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Top-left corner and size, the layout most rasterizers want
    pub fn min_corner(&self) -> Vec2 {
        self.center - self.half_size()
    }
}
