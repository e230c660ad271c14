//! Rendering collaborators
//!
//! The simulation never draws. It hands a read-only `Scene` to anything that
//! implements `Render`: the software `FrameRasterizer` produces an RGB frame,
//! and `Paced` holds any renderer to a fixed frame rate.

pub mod frame;
pub mod pacer;
pub mod shapes;

pub use frame::Frame;
pub use pacer::{FramePacer, Paced};

use glam::Vec2;

use crate::consts::colors;
use crate::sim::{PhysicsState, Rect, Rgb, Side};

/// Paddle corner rounding in pixels
pub const PADDLE_CORNER_RADIUS: f32 = 5.0;
/// Ceiling line dash length (gaps are the same length)
pub const CEILING_DASH: f32 = 25.0;
pub const CEILING_THICKNESS: f32 = 5.0;

/// What a renderer needs to know about one paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub rect: Rect,
    pub color: Rgb,
    pub score: u32,
}

/// Read-only snapshot of everything drawable
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: Rgb,
    pub left: PaddleView,
    pub right: PaddleView,
    pub ball: Rect,
    pub ball_radius: f32,
    pub ball_color: Rgb,
    /// y of the playfield ceiling
    pub ceiling: f32,
    pub ceiling_color: Rgb,
}

impl Scene {
    pub fn from_physics(physics: &PhysicsState) -> Self {
        let view = |side: Side| {
            let paddle = physics.paddle(side);
            PaddleView {
                rect: paddle.rect,
                color: paddle.color,
                score: paddle.score,
            }
        };

        Self {
            width: physics.arena.width,
            height: physics.arena.height,
            background: colors::BACKGROUND,
            left: view(Side::Left),
            right: view(Side::Right),
            ball: physics.ball_rect(),
            ball_radius: physics.ball.radius,
            ball_color: colors::BALL,
            ceiling: physics.arena.min_height,
            ceiling_color: colors::CEILING_LINE,
        }
    }

    pub fn ball_center(&self) -> Vec2 {
        self.ball.center
    }
}

/// Consumes a scene and produces a frame or a side effect
pub trait Render {
    type Output;

    fn render(&mut self, scene: &Scene) -> Self::Output;
}

/// Software rasterizer producing `(height, width, 3)` frames
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRasterizer;

impl Render for FrameRasterizer {
    type Output = Frame;

    fn render(&mut self, scene: &Scene) -> Frame {
        let mut frame = Frame::new(
            scene.width.round() as usize,
            scene.height.round() as usize,
            scene.background,
        );

        for paddle in [&scene.left, &scene.right] {
            shapes::fill_rounded_rect(&mut frame, &paddle.rect, PADDLE_CORNER_RADIUS, paddle.color);
        }
        shapes::fill_circle(&mut frame, scene.ball_center(), scene.ball_radius, scene.ball_color);
        shapes::dashed_hline(
            &mut frame,
            scene.ceiling,
            CEILING_DASH,
            CEILING_THICKNESS,
            scene.ceiling_color,
        );

        frame
    }
}
