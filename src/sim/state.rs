//! Simulation state: paddles, ball, arena
//!
//! Everything here is plain data plus the per-entity motion rules. The RNG is
//! never stored; callers pass their own generator into `reset` so each
//! environment keeps an independent stream.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::colors;
use crate::settings::EnvConfig;

/// RGB color triple
pub type Rgb = [u8; 3];

/// Which side of the arena an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Fixed arena bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Playfield ceiling; nothing may rise above this line
    pub min_height: f32,
}

impl Arena {
    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
            min_height: config.arena_height * config.min_height_ratio,
        }
    }

    /// Arena center, floored to whole units
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }
}

/// A vertically moving paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub speed: f32,
    pub score: u32,
    pub color: Rgb,
}

impl Paddle {
    pub fn new(x: f32, arena: &Arena, size: Vec2, speed: f32, color: Rgb) -> Self {
        Self {
            rect: Rect::from_center(Vec2::new(x, arena.center().y), size),
            speed,
            score: 0,
            color,
        }
    }

    /// Shift vertically by `direction_y * -speed`.
    ///
    /// The negation matches the action table: direction -1 moves the
    /// paddle toward larger y.
    pub fn shift(&mut self, direction_y: f32) {
        self.rect.center.y += direction_y * -self.speed;
    }

    /// Keep the paddle between the playfield ceiling and the arena floor
    pub fn clamp_to(&mut self, arena: &Arena) {
        if self.rect.top() < arena.min_height {
            self.rect.set_top(arena.min_height);
        } else if self.rect.bottom() > arena.height {
            self.rect.set_bottom(arena.height);
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub radius: f32,
    /// Unit heading
    pub direction: Vec2,
    /// Per-axis speed, applied elementwise to `direction`
    pub speed: Vec2,
}

impl Ball {
    pub fn new(center: Vec2, radius: f32, direction: Vec2, speed: Vec2) -> Self {
        Self {
            rect: Rect::from_center(center, Vec2::splat(radius * 2.0)),
            radius,
            direction,
            speed,
        }
    }

    /// Sample a heading: each component magnitude uniform in `[min, max]`,
    /// each sign a fair coin, then normalized.
    pub fn random_direction<R: Rng>(rng: &mut R, min: f32, max: f32) -> Vec2 {
        let component = |rng: &mut R| {
            let magnitude = rng.random_range(min..=max);
            if rng.random_bool(0.5) { magnitude } else { -magnitude }
        };
        let x = component(&mut *rng);
        let y = component(&mut *rng);
        Vec2::new(x, y).normalize()
    }

    /// Displacement applied by one step
    pub fn displacement(&self) -> Vec2 {
        self.direction * self.speed
    }

    pub fn advance(&mut self) {
        let delta = self.displacement();
        self.rect.translate(delta);
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center
    }
}

/// Complete physics state for one episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsState {
    pub arena: Arena,
    /// Scripted paddle
    pub left: Paddle,
    /// Externally controlled paddle
    pub right: Paddle,
    pub ball: Ball,
    paddle_size: Vec2,
    paddle_speed: f32,
    paddle_x: (f32, f32),
    ball_radius: f32,
    ball_speed: Vec2,
    direction_range: (f32, f32),
}

impl PhysicsState {
    /// Build a fresh state from config and immediately reset it
    pub fn new<R: Rng>(config: &EnvConfig, rng: &mut R) -> Self {
        let arena = Arena::from_config(config);
        let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
        let paddle_x = (
            arena.width * config.left_paddle_x_ratio,
            arena.width * config.right_paddle_x_ratio,
        );
        let ball_speed = Vec2::new(config.ball_speed[0], config.ball_speed[1]);

        let mut state = Self {
            arena,
            left: Paddle::new(
                paddle_x.0,
                &arena,
                paddle_size,
                config.paddle_speed,
                colors::LEFT_PADDLE,
            ),
            right: Paddle::new(
                paddle_x.1,
                &arena,
                paddle_size,
                config.paddle_speed,
                colors::RIGHT_PADDLE,
            ),
            ball: Ball::new(arena.center(), config.ball_radius, Vec2::X, ball_speed),
            paddle_size,
            paddle_speed: config.paddle_speed,
            paddle_x,
            ball_radius: config.ball_radius,
            ball_speed,
            direction_range: (config.ball_direction_min, config.ball_direction_max),
        };

        state.reset(rng);
        state
    }

    /// Replace both paddles and the ball with fresh entities.
    ///
    /// Scores restart at zero because the paddles are rebuilt.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let arena = self.arena;
        self.left = Paddle::new(
            self.paddle_x.0,
            &arena,
            self.paddle_size,
            self.paddle_speed,
            colors::LEFT_PADDLE,
        );
        self.right = Paddle::new(
            self.paddle_x.1,
            &arena,
            self.paddle_size,
            self.paddle_speed,
            colors::RIGHT_PADDLE,
        );

        let (min, max) = self.direction_range;
        let direction = Ball::random_direction(rng, min, max);
        self.ball = Ball::new(arena.center(), self.ball_radius, direction, self.ball_speed);

        log::debug!(
            "Physics reset: ball at {:?} heading ({:.3}, {:.3})",
            self.ball.center(),
            direction.x,
            direction.y
        );
    }

    pub fn move_left_paddle(&mut self, direction_y: f32) {
        self.left.shift(direction_y);
    }

    pub fn move_right_paddle(&mut self, direction_y: f32) {
        self.right.shift(direction_y);
    }

    pub fn clamp_paddles(&mut self) {
        let arena = self.arena;
        self.left.clamp_to(&arena);
        self.right.clamp_to(&arena);
    }

    pub fn advance_ball(&mut self) {
        self.ball.advance();
    }

    /// Put the ball back at the arena center, keeping its heading
    pub fn recenter_ball(&mut self) {
        self.ball.rect.center = self.arena.center();
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        self.paddle(side).score
    }

    pub fn paddle_rect(&self, side: Side) -> Rect {
        self.paddle(side).rect
    }

    pub fn ball_rect(&self) -> Rect {
        self.ball.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state(seed: u64) -> PhysicsState {
        let mut rng = Pcg32::seed_from_u64(seed);
        PhysicsState::new(&EnvConfig::default(), &mut rng)
    }

    #[test]
    fn test_reset_layout() {
        let s = state(1);
        assert_eq!(s.arena.min_height, 80.0);
        assert_eq!(s.left.center(), Vec2::new(60.0, 200.0));
        assert_eq!(s.right.center(), Vec2::new(540.0, 200.0));
        assert_eq!(s.ball.center(), Vec2::new(300.0, 200.0));
        assert_eq!(s.ball.rect.size, Vec2::new(20.0, 20.0));
        assert_eq!(s.score(Side::Left), 0);
        assert_eq!(s.score(Side::Right), 0);
    }

    #[test]
    fn test_random_direction_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let d = Ball::random_direction(&mut rng, 0.3, 0.7);
            assert!((d.length() - 1.0).abs() < 1e-5);
            // Ratio of components is bounded by 0.7 / 0.3
            let ratio = d.x.abs() / d.y.abs();
            assert!(ratio >= 0.3 / 0.7 - 1e-4 && ratio <= 0.7 / 0.3 + 1e-4);
        }
    }

    #[test]
    fn test_random_direction_covers_all_quadrants() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let d = Ball::random_direction(&mut rng, 0.3, 0.7);
            let idx = (d.x > 0.0) as usize * 2 + (d.y > 0.0) as usize;
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_paddle_shift_sign() {
        let mut s = state(2);
        s.move_right_paddle(-1.0);
        assert_eq!(s.right.center().y, 203.0);
        s.move_right_paddle(1.0);
        s.move_right_paddle(1.0);
        assert_eq!(s.right.center().y, 197.0);
        s.move_left_paddle(0.0);
        assert_eq!(s.left.center().y, 200.0);
        // No horizontal motion
        assert_eq!(s.right.center().x, 540.0);
    }

    #[test]
    fn test_clamp_paddles() {
        let mut s = state(3);
        s.left.rect.center.y = 10.0;
        s.right.rect.center.y = 1000.0;
        s.clamp_paddles();
        assert_eq!(s.left.rect.top(), 80.0);
        assert_eq!(s.right.rect.bottom(), 400.0);
    }

    #[test]
    fn test_reset_restores_scores_and_positions() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut s = PhysicsState::new(&EnvConfig::default(), &mut rng);
        s.left.score = 3;
        s.right.score = 5;
        s.right.rect.center.y = 300.0;
        s.reset(&mut rng);
        assert_eq!(s.left.score, 0);
        assert_eq!(s.right.score, 0);
        assert_eq!(s.right.center().y, 200.0);
    }

    #[test]
    fn test_advance_ball() {
        let mut s = state(5);
        s.ball.direction = Vec2::new(0.6, -0.8);
        s.advance_ball();
        let c = s.ball.center();
        assert!((c.x - 303.0).abs() < 1e-4);
        assert!((c.y - 196.0).abs() < 1e-4);
    }
}
