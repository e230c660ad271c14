//! Discrete action space for the controlled paddle

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::EnvError;

/// Paddle command chosen by the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Action {
    Up = 0,
    Down = 1,
    Stay = 2,
}

impl Action {
    pub const COUNT: usize = 3;
    pub const ALL: [Action; Self::COUNT] = [Action::Up, Action::Down, Action::Stay];

    /// Vertical direction fed to the paddle
    pub fn direction(self) -> f32 {
        match self {
            Action::Up => -1.0,
            Action::Down => 1.0,
            Action::Stay => 0.0,
        }
    }

    pub fn id(self) -> usize {
        self as usize
    }
}

impl TryFrom<i64> for Action {
    type Error = EnvError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Action::Up),
            1 => Ok(Action::Down),
            2 => Ok(Action::Stay),
            _ => Err(EnvError::InvalidAction(id)),
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = EnvError;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        match Action::ALL.get(id) {
            Some(&action) => Ok(action),
            None => Err(EnvError::InvalidAction(i64::try_from(id).unwrap_or(i64::MAX))),
        }
    }
}

/// The `Discrete(3)` action space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSpace;

impl ActionSpace {
    pub fn n(&self) -> usize {
        Action::COUNT
    }

    pub fn contains(&self, id: i64) -> bool {
        Action::try_from(id).is_ok()
    }

    /// Uniformly sample an action
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Action {
        Action::ALL[rng.random_range(0..self.n())]
    }
}
