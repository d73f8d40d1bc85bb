//! Match state and core simulation types
//!
//! The whole match lives in one owned [`GameState`] aggregate. Restarting a
//! match means building a new one; nothing is reset in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Terminal outcome of a match
///
/// A single enum keeps "lost" and "won" mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Ball in flight, bricks remaining
    #[default]
    InPlay,
    /// Ball fell below the arena floor
    Lost,
    /// Every brick destroyed
    Won,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InPlay
    }
}

/// Something that happened during a tick, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the left or right wall
    SideWallBounce,
    /// Ball bounced off the ceiling
    CeilingBounce,
    /// Ball bounced off the paddle
    PaddleHit,
    /// Brick at this grid index was destroyed
    BrickDestroyed { index: usize },
    /// Ball left through the floor
    Lost,
    /// Last brick destroyed
    Won,
}

/// Brick color tag (cosmetic, ignored by physics)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl BrickColor {
    /// Row palette, top row first
    pub const PALETTE: [BrickColor; 5] = [
        BrickColor::Red,
        BrickColor::Orange,
        BrickColor::Yellow,
        BrickColor::Green,
        BrickColor::Blue,
    ];

    /// Palette entry for a grid row, cycling past the last color
    pub fn for_row(row: usize) -> Self {
        Self::PALETTE[row % Self::PALETTE.len()]
    }

    /// CSS-style hex code
    pub fn hex(self) -> &'static str {
        match self {
            BrickColor::Red => "#e74c3c",
            BrickColor::Orange => "#e67e22",
            BrickColor::Yellow => "#f1c40f",
            BrickColor::Green => "#2ecc71",
            BrickColor::Blue => "#3498db",
        }
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: BrickColor,
    pub visible: bool,
}

impl Brick {
    pub fn new(rect: Rect, color: BrickColor) -> Self {
        Self {
            rect,
            color,
            visible: true,
        }
    }
}

/// The player's paddle, pinned to the arena floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Top edge (arena height minus paddle height)
    pub y: f32,
}

impl Paddle {
    /// Horizontally centered paddle resting on the floor
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            x: (tuning.arena_width - tuning.paddle_width) / 2.0,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            y: tuning.arena_height - tuning.paddle_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Ball at its launch point above the paddle
    pub fn launch(tuning: &Tuning) -> Self {
        Self::new(
            Vec2::new(
                tuning.arena_width / 2.0,
                tuning.arena_height - tuning.ball_start_lift,
            ),
            tuning.ball_start_velocity,
            tuning.ball_radius,
        )
    }
}

/// Build the brick grid, row-major
///
/// Bricks share the arena width equally with `padding` between columns and
/// at both ends.
pub fn build_brick_grid(tuning: &Tuning) -> Vec<Brick> {
    let brick_width = tuning.brick_width();
    let pad = tuning.brick_padding;

    let mut bricks = Vec::with_capacity(tuning.brick_rows * tuning.brick_cols);
    for row in 0..tuning.brick_rows {
        let y = row as f32 * (tuning.brick_height + pad) + pad + tuning.brick_top_offset;
        let color = BrickColor::for_row(row);
        for col in 0..tuning.brick_cols {
            let x = col as f32 * (brick_width + pad) + pad;
            bricks.push(Brick::new(
                Rect::new(x, y, brick_width, tuning.brick_height),
                color,
            ));
        }
    }
    bricks
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Constants this match was built from
    pub tuning: Tuning,
    /// Simulation tick counter (ticks that ran physics)
    pub time_ticks: u64,
    pub score: u32,
    pub outcome: Outcome,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Grid order, row-major; never reordered
    pub bricks: Vec<Brick>,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh match: full brick grid, centered paddle, ball at launch point
    pub fn new(tuning: Tuning) -> Self {
        let bricks = build_brick_grid(&tuning);
        Self {
            paddle: Paddle::centered(&tuning),
            ball: Ball::launch(&tuning),
            bricks,
            tuning,
            time_ticks: 0,
            score: 0,
            outcome: Outcome::InPlay,
            events: Vec::new(),
        }
    }

    pub fn game_over(&self) -> bool {
        self.outcome == Outcome::Lost
    }

    pub fn game_won(&self) -> bool {
        self.outcome == Outcome::Won
    }

    pub fn visible_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    /// Clamp and apply a raw pointer x as the paddle's left edge
    ///
    /// Non-finite input is dropped and the previous position kept.
    /// Returns whether the input was applied.
    pub fn set_paddle_x(&mut self, raw_x: f32) -> bool {
        if !raw_x.is_finite() {
            return false;
        }
        // Upper bound floors at 0 when the paddle is wider than the arena
        self.paddle.x = raw_x.max(0.0).min(self.tuning.paddle_max_x().max(0.0));
        true
    }
}
