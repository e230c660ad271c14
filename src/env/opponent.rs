//! Scripted opponent strategies
//!
//! The scripted paddle asks an `Opponent` for a vertical direction each step.
//! Physics never sees the strategy, so opponents can be swapped freely.

use crate::sigmoid;
use crate::sim::{Ball, Paddle};

/// Produces a vertical direction in [-1, 1] for the scripted paddle
pub trait Opponent: Send {
    fn direction(&mut self, paddle: &Paddle, ball: &Ball) -> f32;
}

/// Proportional tracker: `2 * sigmoid(gain * dy) - 1`, `dy = paddle.y - ball.y`
///
/// Saturates toward +/-1 as the ball gets far away, so the paddle moves at
/// full speed when far off and eases in when level with the ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticTracker {
    pub gain: f32,
}

impl LogisticTracker {
    pub fn new(gain: f32) -> Self {
        Self { gain }
    }

    pub fn direction_for(&self, distance_y: f32) -> f32 {
        2.0 * sigmoid(self.gain * distance_y) - 1.0
    }
}

impl Default for LogisticTracker {
    fn default() -> Self {
        Self::new(crate::consts::TRACKING_GAIN)
    }
}

impl Opponent for LogisticTracker {
    fn direction(&mut self, paddle: &Paddle, ball: &Ball) -> f32 {
        let distance_y = paddle.center().y - ball.center().y;
        self.direction_for(distance_y)
    }
}

/// Never moves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stationary;

impl Opponent for Stationary {
    fn direction(&mut self, _paddle: &Paddle, _ball: &Ball) -> f32 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::EnvConfig;
    use crate::sim::PhysicsState;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> PhysicsState {
        let mut rng = Pcg32::seed_from_u64(123);
        PhysicsState::new(&EnvConfig::default(), &mut rng)
    }

    #[test]
    fn test_level_with_ball_is_still() {
        let mut s = state();
        s.left.rect.center.y = s.ball.center().y;
        let dir = LogisticTracker::default().direction(&s.left, &s.ball);
        assert!(dir.abs() < 1e-6);
    }

    #[test]
    fn test_tracker_is_odd_and_saturating() {
        let t = LogisticTracker::default();
        for d in [1.0, 5.0, 20.0, 80.0] {
            assert!((t.direction_for(d) + t.direction_for(-d)).abs() < 1e-6);
        }
        assert!(t.direction_for(200.0) > 0.99);
        assert!(t.direction_for(-200.0) < -0.99);
        assert!(t.direction_for(10.0) < t.direction_for(20.0));
    }

    #[test]
    fn test_tracker_moves_toward_ball() {
        let mut s = state();
        // Paddle below the ball (larger y): positive direction, which shifts it up
        s.left.rect.center.y = 300.0;
        s.ball.rect.center.y = 150.0;
        let mut tracker = LogisticTracker::default();
        let dir = tracker.direction(&s.left, &s.ball);
        assert!(dir > 0.0);
        let before = s.left.center().y;
        s.move_left_paddle(dir);
        assert!(s.left.center().y < before);
    }

    #[test]
    fn test_stationary() {
        let s = state();
        assert_eq!(Stationary.direction(&s.left, &s.ball), 0.0);
    }
}
