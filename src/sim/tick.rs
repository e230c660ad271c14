//! Fixed timestep simulation tick
//!
//! Advances the physics state by exactly one step in a fixed order.

use super::collision::{CollisionReport, resolve_collisions};
use super::state::PhysicsState;

/// Paddle commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleInput {
    /// Vertical direction for the scripted paddle, in [-1, 1]
    pub left: f32,
    /// Vertical direction for the controlled paddle, in {-1, 0, 1}
    pub right: f32,
}

/// Advance the physics state by one step
///
/// Order: move left paddle, move right paddle, move ball, clamp paddles,
/// resolve collisions.
pub fn tick(state: &mut PhysicsState, input: &PaddleInput) -> CollisionReport {
    state.move_left_paddle(input.left);
    state.move_right_paddle(input.right);
    state.advance_ball();

    state.clamp_paddles();

    resolve_collisions(state)
}
