//! Reinforcement-learning environment around the physics state
//!
//! `reset` starts an episode, `step` applies one agent action plus one
//! scripted opponent move and returns the usual
//! (observation, reward, terminated, truncated, info) tuple.

pub mod action;
pub mod observation;
pub mod opponent;

pub use action::{Action, ActionSpace};
pub use observation::{
    ArenaCenter, EntityPositions, Info, Observation, ObservationBuilder, ObservationSpace, Point,
};
pub use opponent::{LogisticTracker, Opponent, Stationary};

use rand::SeedableRng;
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::renderer::{Render, Scene};
use crate::settings::{ConfigError, EnvConfig};
use crate::sim::{Arena, PaddleInput, PhysicsState, Side, tick};

/// Errors surfaced by the environment contract
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("action {0} is outside the action space {{0, 1, 2}}")]
    InvalidAction(i64),
    #[error("environment has not been reset")]
    NotReset,
    #[error("episode has terminated; call reset before stepping again")]
    EpisodeTerminated,
}

/// Where the environment is in its episode lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodePhase {
    /// Constructed, no episode yet
    AwaitingReset,
    /// Stepping allowed
    Active,
    /// The last step scored; only `reset` is allowed
    Terminal,
}

/// Result of a single step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f32,
    pub terminated: bool,
    /// Always false; there is no step limit
    pub truncated: bool,
    pub info: Info,
}

/// Pong environment: scripted left paddle vs. agent-driven right paddle
pub struct Environment {
    config: EnvConfig,
    rng: Pcg32,
    physics: Option<PhysicsState>,
    phase: EpisodePhase,
    steps: u64,
    opponent: Box<dyn Opponent>,
    observer: Box<dyn ObservationBuilder>,
}

impl Environment {
    /// Environment with the logistic tracker and entity-position observations
    pub fn new(config: EnvConfig) -> Result<Self, ConfigError> {
        let opponent = LogisticTracker::new(config.tracking_gain);
        Self::with_parts(config, Box::new(opponent), Box::new(EntityPositions))
    }

    /// Environment with a caller-chosen opponent and observation builder
    pub fn with_parts(
        config: EnvConfig,
        opponent: Box<dyn Opponent>,
        observer: Box<dyn ObservationBuilder>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_os_rng(),
        };

        Ok(Self {
            config,
            rng,
            physics: None,
            phase: EpisodePhase::AwaitingReset,
            steps: 0,
            opponent,
            observer,
        })
    }

    /// Start a new episode.
    ///
    /// A seed reseeds the generator; without one the existing stream continues.
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, Info) {
        if let Some(seed) = seed {
            self.rng = Pcg32::seed_from_u64(seed);
        }

        let physics = match self.physics.take() {
            Some(mut physics) => {
                physics.reset(&mut self.rng);
                physics
            }
            None => PhysicsState::new(&self.config, &mut self.rng),
        };
        self.phase = EpisodePhase::Active;
        self.steps = 0;

        log::debug!("Episode reset (seed {:?})", seed);
        let out = observe(self.observer.as_ref(), &self.observation_space(), &physics, 0);
        self.physics = Some(physics);
        out
    }

    /// Step with a raw action id; ids outside {0, 1, 2} are rejected
    pub fn step_id(&mut self, action: i64) -> Result<StepResult, EnvError> {
        let action = Action::try_from(action)?;
        self.step(action)
    }

    /// Advance one step
    pub fn step(&mut self, action: Action) -> Result<StepResult, EnvError> {
        match self.phase {
            EpisodePhase::AwaitingReset => return Err(EnvError::NotReset),
            EpisodePhase::Terminal => return Err(EnvError::EpisodeTerminated),
            EpisodePhase::Active => {}
        }
        let space = self.observation_space();
        let physics = self.physics.as_mut().ok_or(EnvError::NotReset)?;

        let input = PaddleInput {
            left: self.opponent.direction(&physics.left, &physics.ball),
            right: action.direction(),
        };
        let report = tick(physics, &input);
        self.steps += 1;

        let reward = match report.scored {
            Some(Side::Right) => self.config.reward_agent_scored,
            Some(Side::Left) => self.config.reward_opponent_scored,
            None => 0.0,
        };
        let terminated = report.terminated();
        if terminated {
            self.phase = EpisodePhase::Terminal;
        }

        log::trace!(
            "step {}: action {:?} opponent {:.3} reward {} terminated {}",
            self.steps,
            action,
            input.left,
            reward,
            terminated
        );

        let (observation, info) = observe(self.observer.as_ref(), &space, physics, self.steps);
        Ok(StepResult {
            observation,
            reward,
            terminated,
            truncated: false,
            info,
        })
    }

    /// Read-only snapshot for a rendering collaborator
    pub fn scene(&self) -> Result<Scene, EnvError> {
        self.physics.as_ref().map(Scene::from_physics).ok_or(EnvError::NotReset)
    }

    /// Hand the current scene to a renderer
    pub fn render<R: Render>(&self, renderer: &mut R) -> Result<R::Output, EnvError> {
        let scene = self.scene()?;
        Ok(renderer.render(&scene))
    }

    pub fn action_space(&self) -> ActionSpace {
        ActionSpace
    }

    pub fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::for_arena(&Arena::from_config(&self.config))
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    /// Steps taken in the current episode
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn physics(&self) -> Option<&PhysicsState> {
        self.physics.as_ref()
    }

    /// Mutable physics access for scenario setup
    pub fn physics_mut(&mut self) -> Option<&mut PhysicsState> {
        self.physics.as_mut()
    }
}

fn observe(
    observer: &dyn ObservationBuilder,
    space: &ObservationSpace,
    physics: &PhysicsState,
    steps: u64,
) -> (Observation, Info) {
    let observation = observer.observe(physics, space);
    let info = Info::new(&observation, physics, steps);
    (observation, info)
}
