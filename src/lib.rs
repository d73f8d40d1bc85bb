//! Brickfall - a deterministic brick-breaker simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `tuning`: Data-driven design constants
//! - `platform`: Host integration (pointer mailbox, renderer seam, frame loop)
//! - `renderer`: Headless text renderer for snapshots
//! - `autopilot`: Seeded pointer source for demos and soak runs

pub mod autopilot;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use autopilot::Autopilot;
pub use platform::{FrameLoop, PointerMailbox, Renderer};
pub use renderer::TextRenderer;
pub use sim::{GameEvent, Outcome, SimulationCore, Snapshot};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults - pinned to the arena floor
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Launch velocity in pixels per tick (up and to the right)
    pub const BALL_START_DX: f32 = 4.0;
    pub const BALL_START_DY: f32 = -4.0;
    /// Launch height above the arena floor
    pub const BALL_START_LIFT: f32 = 30.0;

    /// Lateral spin imparted per pixel of off-center paddle contact
    pub const PADDLE_ENGLISH: f32 = 0.05;

    /// Brick grid
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_TOP_OFFSET: f32 = 30.0;

    /// Score awarded per destroyed brick
    pub const POINTS_PER_BRICK: u32 = 10;
}
