//! Collision detection and response
//!
//! Paddle hits, wall bounces and scoring are checked in a fixed order every
//! step. A paddle hit snaps the ball one unit clear of the paddle face so it
//! cannot register twice. A wall clamp that lands the ball back on a paddle
//! gets the same snap without a second heading flip.

use super::state::{PhysicsState, Side};

/// What happened during collision resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Paddle the ball bounced off
    pub paddle_hit: Option<Side>,
    /// Ball bounced off the ceiling line or the floor
    pub wall_bounce: bool,
    /// Paddle that was awarded a point
    pub scored: Option<Side>,
}

impl CollisionReport {
    /// A scoring event ends the episode
    pub fn terminated(&self) -> bool {
        self.scored.is_some()
    }
}

/// Resolve paddle, wall and goal collisions for the current ball position
pub fn resolve_collisions(state: &mut PhysicsState) -> CollisionReport {
    let paddle_hit = resolve_paddle_hit(state);
    let wall_bounce = resolve_wall_bounce(state);
    if wall_bounce {
        // The vertical clamp can push the ball back into a paddle
        separate_from_paddles(state);
    }
    let scored = resolve_goal(state);

    CollisionReport {
        paddle_hit,
        wall_bounce,
        scored,
    }
}

/// Flip horizontal heading and push the ball clear of whichever paddle it overlaps
fn resolve_paddle_hit(state: &mut PhysicsState) -> Option<Side> {
    let hit = separate_from_paddles(state)?;
    state.ball.direction.x = -state.ball.direction.x;
    Some(hit)
}

/// Snap the ball one unit clear of the face of an overlapping paddle
fn separate_from_paddles(state: &mut PhysicsState) -> Option<Side> {
    let ball = state.ball.rect;
    if ball.intersects(&state.left.rect) {
        let face = state.left.rect.right();
        state.ball.rect.set_left(face + 1.0);
        Some(Side::Left)
    } else if ball.intersects(&state.right.rect) {
        let face = state.right.rect.left();
        state.ball.rect.set_right(face - 1.0);
        Some(Side::Right)
    } else {
        None
    }
}

/// Elastic bounce off the ceiling line and the floor; never terminal
fn resolve_wall_bounce(state: &mut PhysicsState) -> bool {
    let arena = state.arena;
    let ball = &mut state.ball;
    let mut bounced = false;

    if ball.rect.top() < arena.min_height {
        ball.rect.set_top(arena.min_height + 1.0);
        ball.direction.y = -ball.direction.y;
        bounced = true;
    }
    if ball.rect.bottom() > arena.height {
        ball.rect.set_bottom(arena.height - 1.0);
        ball.direction.y = -ball.direction.y;
        bounced = true;
    }

    bounced
}

/// Award a point when the ball leaves through either side, then recentre it
fn resolve_goal(state: &mut PhysicsState) -> Option<Side> {
    let scorer = if state.ball.rect.left() < 0.0 {
        Side::Right
    } else if state.ball.rect.right() > state.arena.width {
        Side::Left
    } else {
        return None;
    };

    state.paddle_mut(scorer).score += 1;
    state.recenter_ball();
    log::info!(
        "{:?} paddle scored (left {} - right {})",
        scorer,
        state.left.score,
        state.right.score
    );

    Some(scorer)
}
