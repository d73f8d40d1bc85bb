//! Collision detection for walls, paddle and bricks
//!
//! All three tests are deliberately loose: the paddle check is a horizontal
//! band test and the brick check uses only the ball's center point. Neither
//! sweeps the ball's path, so a fast ball can pass through thin geometry.

use glam::Vec2;

use super::state::{Ball, Brick, Paddle};

/// Which arena walls the ball's leading edge has crossed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall
    pub side: bool,
    /// Ceiling
    pub ceiling: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.ceiling
    }
}

/// Check the ball against the left, right and top arena boundaries
///
/// The floor is open; falling through it is the loss condition, see
/// [`ball_below_floor`].
pub fn ball_wall_contact(ball: &Ball, arena_width: f32) -> WallContact {
    WallContact {
        side: ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > arena_width,
        ceiling: ball.pos.y - ball.radius < 0.0,
    }
}

/// Band test: bottom edge past the paddle's top and center strictly within
/// the paddle's horizontal span
///
/// The ball's vertical position is not checked beyond the band threshold, so
/// a ball below the paddle's top (or past the floor) still registers.
pub fn ball_paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.radius > paddle.y && paddle.rect().spans_x(ball.pos.x)
}

/// Velocity after a paddle hit: always upward, plus lateral "english"
/// proportional to the distance from the paddle center
pub fn paddle_bounce_velocity(ball: &Ball, paddle: &Paddle, english: f32) -> Vec2 {
    Vec2::new(
        ball.vel.x + (ball.pos.x - paddle.center_x()) * english,
        -ball.vel.y.abs(),
    )
}

/// Check if the ball's bottom edge has dropped past the arena floor
pub fn ball_below_floor(ball: &Ball, arena_height: f32) -> bool {
    ball.pos.y + ball.radius > arena_height
}

/// Result of one brick scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickScan {
    /// Grid index of the first visible brick containing the ball center
    pub hit: Option<usize>,
    /// Whether any visible brick remains once `hit` is removed
    pub remaining: bool,
}

/// Scan bricks in grid order for the first one containing `point`
///
/// Only the first match counts; later overlapping bricks are left alone and
/// still count as remaining.
pub fn scan_bricks(point: Vec2, bricks: &[Brick]) -> BrickScan {
    let mut hit = None;
    let mut remaining = false;

    for (index, brick) in bricks.iter().enumerate() {
        if !brick.visible {
            continue;
        }
        if hit.is_none() && brick.rect.contains_point(point) {
            hit = Some(index);
        } else {
            remaining = true;
        }
    }

    BrickScan { hit, remaining }
}
