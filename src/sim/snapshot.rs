//! Read-only view of a match for the rendering collaborator

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{BrickColor, GameEvent, GameState, Outcome};

/// A visible brick as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    /// Grid index (row-major)
    pub index: usize,
    pub rect: Rect,
    pub color: BrickColor,
}

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub arena: Vec2,
    pub paddle: Rect,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub ball_radius: f32,
    /// Visible bricks only, grid order
    pub bricks: Vec<BrickView>,
    pub score: u32,
    pub game_over: bool,
    pub game_won: bool,
    /// Events raised by the tick that produced this snapshot; empty on
    /// frozen ticks after the match ends
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let bricks = state
            .bricks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.visible)
            .map(|(index, b)| BrickView {
                index,
                rect: b.rect,
                color: b.color,
            })
            .collect();

        Self {
            tick: state.time_ticks,
            arena: Vec2::new(state.tuning.arena_width, state.tuning.arena_height),
            paddle: state.paddle.rect(),
            ball_pos: state.ball.pos,
            ball_vel: state.ball.vel,
            ball_radius: state.ball.radius,
            bricks,
            score: state.score,
            game_over: state.game_over(),
            game_won: state.game_won(),
            events: state.events.clone(),
        }
    }

    pub fn outcome(&self) -> Outcome {
        match (self.game_over, self.game_won) {
            (true, _) => Outcome::Lost,
            (_, true) => Outcome::Won,
            _ => Outcome::InPlay,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.game_over || self.game_won
    }

    pub fn visible_bricks(&self) -> usize {
        self.bricks.len()
    }
}
