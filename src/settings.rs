//! Environment settings
//!
//! Every tunable number of the simulation, with defaults equal to the
//! classic 600x400 game. Loadable from JSON; missing keys fall back to the
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Environment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Playfield ceiling as a fraction of arena height
    pub min_height_ratio: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Units moved per step at full deflection
    pub paddle_speed: f32,
    pub left_paddle_x_ratio: f32,
    pub right_paddle_x_ratio: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed multiplied elementwise with the heading
    pub ball_speed: [f32; 2],
    pub ball_direction_min: f32,
    pub ball_direction_max: f32,

    // === Opponent / rewards ===
    /// Logistic gain of the scripted paddle
    pub tracking_gain: f32,
    pub reward_agent_scored: f32,
    pub reward_opponent_scored: f32,

    // === Presentation ===
    pub render_fps: u32,

    /// RNG seed used before the first seeded reset (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            min_height_ratio: MIN_HEIGHT_RATIO,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            left_paddle_x_ratio: LEFT_PADDLE_X_RATIO,
            right_paddle_x_ratio: RIGHT_PADDLE_X_RATIO,

            ball_radius: BALL_RADIUS,
            ball_speed: [BALL_SPEED.0, BALL_SPEED.1],
            ball_direction_min: BALL_DIRECTION_MIN,
            ball_direction_max: BALL_DIRECTION_MAX,

            tracking_gain: TRACKING_GAIN,
            reward_agent_scored: REWARD_AGENT_SCORED,
            reward_opponent_scored: REWARD_OPPONENT_SCORED,

            render_fps: RENDER_FPS,

            seed: None,
        }
    }
}

impl EnvConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pretty JSON, suitable for writing a starter config
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Playfield ceiling in arena units
    pub fn min_height(&self) -> f32 {
        self.arena_height * self.min_height_ratio
    }

    /// Reject geometry the simulation cannot keep its invariants under
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return invalid("arena dimensions must be positive");
        }
        if !(0.0..1.0).contains(&self.min_height_ratio) {
            return invalid("min_height_ratio must be in [0, 1)");
        }
        let playfield = self.arena_height - self.min_height();
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return invalid("paddle size must be positive");
        }
        if self.paddle_height > playfield {
            return invalid("paddle does not fit between ceiling and floor");
        }
        if self.ball_radius <= 0.0 || self.ball_radius * 2.0 + 2.0 > playfield {
            return invalid("ball does not fit between ceiling and floor");
        }
        if !(0.0..=1.0).contains(&self.left_paddle_x_ratio)
            || !(0.0..=1.0).contains(&self.right_paddle_x_ratio)
            || self.left_paddle_x_ratio >= self.right_paddle_x_ratio
        {
            return invalid("paddle x ratios must satisfy 0 <= left < right <= 1");
        }
        if self.ball_direction_min <= 0.0 || self.ball_direction_min > self.ball_direction_max {
            return invalid("ball direction range must satisfy 0 < min <= max");
        }
        if !self.ball_speed.iter().all(|v| v.is_finite() && *v >= 0.0) {
            return invalid("ball_speed components must be finite and non-negative");
        }
        if !(self.paddle_speed.is_finite() && self.paddle_speed >= 0.0) {
            return invalid("paddle_speed must be finite and non-negative");
        }
        if !self.tracking_gain.is_finite() {
            return invalid("tracking_gain must be finite");
        }
        if !(self.reward_agent_scored.is_finite() && self.reward_opponent_scored.is_finite()) {
            return invalid("rewards must be finite");
        }
        if self.render_fps == 0 {
            return invalid("render_fps must be positive");
        }
        Ok(())
    }
}
