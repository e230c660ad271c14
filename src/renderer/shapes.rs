//! Rasterization of 2D primitives into a `Frame`
//!
//! A pixel is covered when its center lies inside the shape.

use glam::Vec2;

use super::frame::Frame;
use crate::sim::{Rect, Rgb};

/// Integer pixel span whose centers fall in `[min, max)`
fn pixel_span(min: f32, max: f32) -> std::ops::Range<i64> {
    let start = (min - 0.5).ceil() as i64;
    let end = (max - 0.5).ceil() as i64;
    start..end
}

#[inline]
fn pixel_center(x: i64, y: i64) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Filled axis-aligned rectangle
pub fn fill_rect(frame: &mut Frame, rect: &Rect, color: Rgb) {
    fill_rounded_rect(frame, rect, 0.0, color);
}

/// Filled rectangle with circular corners of `radius`
pub fn fill_rounded_rect(frame: &mut Frame, rect: &Rect, radius: f32, color: Rgb) {
    let radius = radius.min(rect.size.x / 2.0).min(rect.size.y / 2.0).max(0.0);
    // Corner circles are centered `radius` in from each edge
    let inner_min = rect.min_corner() + Vec2::splat(radius);
    let inner_max = rect.min_corner() + rect.size - Vec2::splat(radius);

    for y in pixel_span(rect.top(), rect.bottom()) {
        for x in pixel_span(rect.left(), rect.right()) {
            let p = pixel_center(x, y);
            let nearest = p.clamp(inner_min, inner_max);
            if radius == 0.0 || p.distance_squared(nearest) <= radius * radius {
                frame.put(x, y, color);
            }
        }
    }
}

/// Filled circle
pub fn fill_circle(frame: &mut Frame, center: Vec2, radius: f32, color: Rgb) {
    for y in pixel_span(center.y - radius, center.y + radius) {
        for x in pixel_span(center.x - radius, center.x + radius) {
            if pixel_center(x, y).distance_squared(center) <= radius * radius {
                frame.put(x, y, color);
            }
        }
    }
}

/// Horizontal dashed line centered on `y`, starting at x = 0
pub fn dashed_hline(frame: &mut Frame, y: f32, dash: f32, thickness: f32, color: Rgb) {
    let width = frame.width() as f32;
    let mut x = 0.0;
    while x < width {
        let segment = Rect::from_center(Vec2::new(x + dash / 2.0, y), Vec2::new(dash, thickness));
        fill_rect(frame, &segment, color);
        x += dash * 2.0;
    }
}
