//! Observations and step info
//!
//! An observation is a mapping with exactly two keys, `agent` and `target`,
//! each an integer point inside `[0, arena_width - 1]`. What the two points
//! mean is decided by the `ObservationBuilder` the environment was built with.

use serde::{Deserialize, Serialize};

use crate::sim::{Arena, PhysicsState, Side};

/// Integer 2D point
pub type Point = [i32; 2];

/// Agent-facing observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub agent: Point,
    pub target: Point,
}

/// Auxiliary diagnostics returned alongside every observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// L1 distance between `agent` and `target`
    pub distance: i32,
    pub left_score: u32,
    pub right_score: u32,
    /// Steps taken in the current episode
    pub steps: u64,
}

impl Info {
    pub fn new(observation: &Observation, physics: &PhysicsState, steps: u64) -> Self {
        let distance = (observation.agent[0] - observation.target[0]).abs()
            + (observation.agent[1] - observation.target[1]).abs();
        Self {
            distance,
            left_score: physics.score(Side::Left),
            right_score: physics.score(Side::Right),
            steps,
        }
    }
}

/// Declared bounds of every observation coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationSpace {
    pub low: i32,
    pub high: i32,
}

impl ObservationSpace {
    pub fn for_arena(arena: &Arena) -> Self {
        Self {
            low: 0,
            high: arena.width as i32 - 1,
        }
    }

    pub fn clamp(&self, point: Point) -> Point {
        [point[0].clamp(self.low, self.high), point[1].clamp(self.low, self.high)]
    }

    pub fn contains(&self, observation: &Observation) -> bool {
        [observation.agent, observation.target]
            .iter()
            .flatten()
            .all(|v| (self.low..=self.high).contains(v))
    }
}

/// Builds the observation from the current physics state
pub trait ObservationBuilder: Send {
    fn observe(&self, physics: &PhysicsState, space: &ObservationSpace) -> Observation;
}

/// `agent` = controlled paddle center, `target` = ball center
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityPositions;

impl ObservationBuilder for EntityPositions {
    fn observe(&self, physics: &PhysicsState, space: &ObservationSpace) -> Observation {
        let to_point = |v: glam::Vec2| space.clamp([v.x.round() as i32, v.y.round() as i32]);
        Observation {
            agent: to_point(physics.right.center()),
            target: to_point(physics.ball.center()),
        }
    }
}

/// Both points pinned at the arena center, whatever the entities do
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaCenter;

impl ObservationBuilder for ArenaCenter {
    fn observe(&self, physics: &PhysicsState, space: &ObservationSpace) -> Observation {
        let c = physics.arena.center();
        let center = space.clamp([c.x as i32, c.y as i32]);
        Observation {
            agent: center,
            target: center,
        }
    }
}
