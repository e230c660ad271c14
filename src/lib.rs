//! Pong Env - a two-paddle Pong simulation as a reinforcement-learning environment
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `env`: Reset/step/observe contract around the simulation
//! - `renderer`: Scene snapshots and a software RGB rasterizer
//! - `settings`: Tunable constants with JSON loading

pub mod env;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use env::{Action, ActionSpace, EnvError, Environment, Info, Observation, StepResult};
pub use settings::{ConfigError, EnvConfig};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;
    /// Playfield ceiling as a fraction of arena height (top strip holds the scores)
    pub const MIN_HEIGHT_RATIO: f32 = 0.2;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 3.0;
    /// Horizontal paddle centers as fractions of arena width
    pub const LEFT_PADDLE_X_RATIO: f32 = 0.1;
    pub const RIGHT_PADDLE_X_RATIO: f32 = 0.9;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis speed, multiplied elementwise with the unit direction
    pub const BALL_SPEED: (f32, f32) = (5.0, 5.0);
    /// Range of each direction component magnitude before normalization
    pub const BALL_DIRECTION_MIN: f32 = 0.3;
    pub const BALL_DIRECTION_MAX: f32 = 0.7;

    /// Logistic gain of the scripted tracking paddle
    pub const TRACKING_GAIN: f32 = 0.1;

    /// Terminal rewards
    pub const REWARD_AGENT_SCORED: f32 = 2.0;
    pub const REWARD_OPPONENT_SCORED: f32 = -1.0;

    /// Presentation rate for paced rendering
    pub const RENDER_FPS: u32 = 30;

    /// Entity and background colors (RGB)
    pub mod colors {
        pub const BACKGROUND: [u8; 3] = [20, 25, 40];
        pub const LEFT_PADDLE: [u8; 3] = [0, 127, 255];
        pub const RIGHT_PADDLE: [u8; 3] = [255, 92, 89];
        pub const BALL: [u8; 3] = [255, 255, 255];
        pub const CEILING_LINE: [u8; 3] = [255, 255, 255];
    }
}

/// Logistic sigmoid
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
