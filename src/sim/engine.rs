//! The simulation engine: the three operations a host drives

use super::snapshot::Snapshot;
use super::state::GameState;
use super::tick::tick;
use crate::tuning::Tuning;

/// Owns the authoritative match state
///
/// Single writer: the host calls [`set_paddle_target`](Self::set_paddle_target)
/// between ticks and [`advance`](Self::advance) once per frame.
#[derive(Debug, Clone)]
pub struct SimulationCore {
    state: GameState,
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::initialize(Tuning::default())
    }
}

impl SimulationCore {
    /// Start a fresh match
    pub fn initialize(tuning: Tuning) -> Self {
        log::debug!(
            "Initializing {}x{} arena with {}x{} bricks",
            tuning.arena_width,
            tuning.arena_height,
            tuning.brick_rows,
            tuning.brick_cols
        );
        Self::from_state(GameState::new(tuning))
    }

    /// Wrap an existing state (scripted scenarios, replays)
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Move the paddle to a raw pointer x, clamped to the arena
    ///
    /// Non-finite input is ignored. Returns whether the input was applied.
    pub fn set_paddle_target(&mut self, raw_x: f32) -> bool {
        let applied = self.state.set_paddle_x(raw_x);
        if !applied {
            log::debug!("Ignoring non-finite paddle target {raw_x}");
        }
        applied
    }

    /// Run one tick and return the resulting snapshot
    ///
    /// Once the match is over this returns the frozen state unchanged.
    pub fn advance(&mut self) -> Snapshot {
        tick(&mut self.state);
        self.snapshot()
    }

    /// Current snapshot without advancing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.state.tuning
    }

    pub fn is_terminal(&self) -> bool {
        self.state.outcome.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_snapshot() {
        let core = SimulationCore::default();
        let snap = core.snapshot();
        assert_eq!(snap.tick, 0);
        assert_eq!(snap.visible_bricks(), 40);
        assert_eq!(snap.score, 0);
        assert!(!snap.is_terminal());
    }

    #[test]
    fn test_paddle_target_applies_before_next_tick() {
        let mut core = SimulationCore::default();
        assert!(core.set_paddle_target(-10.0));
        assert_eq!(core.advance().paddle.x, 0.0);

        assert!(core.set_paddle_target(10_000.0));
        assert_eq!(core.advance().paddle.x, 700.0);

        assert!(!core.set_paddle_target(f32::NAN));
        assert_eq!(core.advance().paddle.x, 700.0);
    }

    #[test]
    fn test_advance_counts_ticks() {
        let mut core = SimulationCore::default();
        for expected in 1..=5 {
            assert_eq!(core.advance().tick, expected);
        }
    }

    #[test]
    fn test_paddle_target_with_paddle_wider_than_arena() {
        let mut core = SimulationCore::initialize(Tuning {
            paddle_width: 900.0,
            ..Default::default()
        });
        assert!(core.set_paddle_target(100.0));
        assert_eq!(core.advance().paddle.x, 0.0);
    }
}
