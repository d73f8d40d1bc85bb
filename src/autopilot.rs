//! Seeded pointer source that plays the game
//!
//! Tracks the ball with a bounded random aim error so matches are neither
//! perfect nor hopeless. Same seed, same pointer stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::Snapshot;

/// Default aim error (pixels either side of the ideal pointer x)
pub const DEFAULT_AIM_ERROR: f32 = 30.0;

/// Produces pointer positions from snapshots
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    max_aim_error: f32,
}

impl Autopilot {
    pub fn new(seed: u64, max_aim_error: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            max_aim_error: if max_aim_error.is_finite() {
                max_aim_error.abs()
            } else {
                0.0
            },
        }
    }

    /// Pointer x that centers the paddle under the ball, give or take the
    /// aim error
    pub fn pointer_x(&mut self, snapshot: &Snapshot) -> f32 {
        let ideal = snapshot.ball_pos.x - snapshot.paddle.width / 2.0;
        if self.max_aim_error == 0.0 {
            return ideal;
        }
        let error = self
            .rng
            .random_range(-self.max_aim_error..=self.max_aim_error);
        ideal + error
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(0, DEFAULT_AIM_ERROR)
    }
}
