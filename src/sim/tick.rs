//! Fixed timestep simulation tick
//!
//! Velocity is in pixels per tick; the host's frame clock is the only clock.

use super::collision::{
    ball_below_floor, ball_paddle_contact, ball_wall_contact, paddle_bounce_velocity, scan_bricks,
};
use super::state::{GameEvent, GameState, Outcome};

/// Advance the match by one tick
///
/// Once the match is over only the event list is cleared; physics, score and
/// bricks stay frozen. Paddle input is applied separately (see
/// [`GameState::set_paddle_x`]) and is never read mid-tick.
pub fn tick(state: &mut GameState) {
    state.events.clear();
    if state.outcome.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    let tuning = &state.tuning;
    let ball = &mut state.ball;

    // Integrate
    ball.pos += ball.vel;

    // Walls: flip velocity only, the ball may overlap a wall for a tick
    let walls = ball_wall_contact(ball, tuning.arena_width);
    if walls.side {
        ball.vel.x = -ball.vel.x;
        state.events.push(GameEvent::SideWallBounce);
    }
    if walls.ceiling {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::CeilingBounce);
    }

    // Paddle
    if ball_paddle_contact(ball, &state.paddle) {
        ball.vel = paddle_bounce_velocity(ball, &state.paddle, tuning.paddle_english);
        state.events.push(GameEvent::PaddleHit);
    }

    // Floor
    if ball_below_floor(ball, tuning.arena_height) {
        state.outcome = Outcome::Lost;
        state.events.push(GameEvent::Lost);
        log::info!(
            "Ball lost at tick {} with score {}",
            state.time_ticks,
            state.score
        );
        return;
    }

    // Bricks: first hit in grid order only
    let scan = scan_bricks(ball.pos, &state.bricks);
    if let Some(index) = scan.hit {
        state.bricks[index].visible = false;
        ball.vel.y = -ball.vel.y;
        state.score = state.score.saturating_add(tuning.points_per_brick);
        state.events.push(GameEvent::BrickDestroyed { index });
        log::debug!("Brick {} destroyed, score {}", index, state.score);
    }

    if !scan.remaining {
        state.outcome = Outcome::Won;
        state.events.push(GameEvent::Won);
        log::info!(
            "All bricks cleared at tick {} with score {}",
            state.time_ticks,
            state.score
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Brick, BrickColor};
    use crate::tuning::Tuning;

    fn fresh() -> GameState {
        GameState::new(Tuning::default())
    }

    #[test]
    fn test_integrates_position() {
        let mut state = fresh();
        tick(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(404.0, 566.0));
        assert_eq!(state.time_ticks, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut state = fresh();
        state.ball.pos = Vec2::new(5.0, 300.0);
        state.ball.vel = Vec2::new(-4.0, 0.0);

        tick(&mut state);
        assert_eq!(state.ball.vel.x, 4.0);
        // No positional correction
        assert_eq!(state.ball.pos.x, 1.0);
        assert_eq!(state.events, vec![GameEvent::SideWallBounce]);

        tick(&mut state);
        assert_eq!(state.ball.pos.x, 5.0);
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut state = fresh();
        state.ball.pos = Vec2::new(400.0, 10.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        tick(&mut state);
        assert_eq!(state.ball.vel.y, 4.0);
        assert_eq!(state.events, vec![GameEvent::CeilingBounce]);
    }

    #[test]
    fn test_paddle_bounce_forces_upward() {
        let mut state = fresh();
        state.ball.pos = Vec2::new(420.0, 580.0);
        state.ball.vel = Vec2::new(0.0, 4.0);

        tick(&mut state);
        assert_eq!(state.ball.vel.y, -4.0);
        // (420 - 400) * 0.05
        assert!((state.ball.vel.x - 1.0).abs() < 0.0001);
        assert_eq!(state.events, vec![GameEvent::PaddleHit]);
        assert_eq!(state.outcome, Outcome::InPlay);
    }

    #[test]
    fn test_loss_skips_brick_scan() {
        let mut state = fresh();
        state.paddle.x = 0.0;
        state.bricks = vec![Brick::new(
            Rect::new(380.0, 590.0, 40.0, 20.0),
            BrickColor::Red,
        )];
        state.ball.pos = Vec2::new(400.0, 595.0);
        state.ball.vel = Vec2::new(0.0, 6.0);

        tick(&mut state);
        assert_eq!(state.outcome, Outcome::Lost);
        assert!(state.bricks[0].visible);
        assert_eq!(state.score, 0);
        assert_eq!(state.events, vec![GameEvent::Lost]);
    }

    #[test]
    fn test_loss_even_after_paddle_bounce() {
        // Centered paddle catches x=400, but the ball is already past the floor
        let mut state = fresh();
        state.ball.pos = Vec2::new(400.0, 595.0);
        state.ball.vel = Vec2::new(0.0, 6.0);

        tick(&mut state);
        assert!(state.game_over());
        assert_eq!(state.events, vec![GameEvent::PaddleHit, GameEvent::Lost]);
    }

    #[test]
    fn test_last_brick_wins_same_tick() {
        let mut state = fresh();
        state.bricks = vec![Brick::new(
            Rect::new(100.0, 100.0, 70.0, 20.0),
            BrickColor::Red,
        )];
        state.ball.pos = Vec2::new(116.0, 109.0);
        state.ball.vel = Vec2::new(4.0, -4.0);

        tick(&mut state);
        assert!(!state.bricks[0].visible);
        assert_eq!(state.score, 10);
        assert_eq!(state.outcome, Outcome::Won);
        assert_eq!(
            state.events,
            vec![GameEvent::BrickDestroyed { index: 0 }, GameEvent::Won]
        );
    }

    #[test]
    fn test_frozen_after_terminal() {
        let mut state = fresh();
        state.outcome = Outcome::Lost;
        let before = state.clone();

        tick(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_final_events_not_repeated_while_frozen() {
        let mut state = fresh();
        state.ball.pos = Vec2::new(400.0, 595.0);
        state.ball.vel = Vec2::new(0.0, 6.0);

        tick(&mut state);
        assert_eq!(state.events, vec![GameEvent::PaddleHit, GameEvent::Lost]);
        let ball = state.ball.clone();

        tick(&mut state);
        assert!(state.events.is_empty());
        assert_eq!(state.ball, ball);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_score_saturates_on_unvalidated_tuning() {
        let mut state = fresh();
        state.tuning.points_per_brick = u32::MAX;
        state.score = u32::MAX - 5;
        state.ball.pos = state.bricks[0].rect.center() + Vec2::new(0.0, 4.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        tick(&mut state);
        assert!(!state.bricks[0].visible);
        assert_eq!(state.score, u32::MAX);
    }
}
