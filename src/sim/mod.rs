//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, velocity in pixels per tick
//! - Stable iteration order (brick grid order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod engine;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{BrickScan, WallContact, scan_bricks};
pub use engine::SimulationCore;
pub use rect::Rect;
pub use snapshot::{BrickView, Snapshot};
pub use state::{
    Ball, Brick, BrickColor, GameEvent, GameState, Outcome, Paddle, build_brick_grid,
};
pub use tick::tick;
