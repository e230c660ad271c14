//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - RNG supplied by the caller, never global
//! - No rendering or environment dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, resolve_collisions};
pub use rect::Rect;
pub use state::{Arena, Ball, Paddle, PhysicsState, Rgb, Side};
pub use tick::{PaddleInput, tick};
