//! Host-side frame loop
//!
//! One call to [`FrameLoop::frame`] per display refresh: drain pointer input,
//! advance the simulation once, hand the snapshot to the renderer.

use std::sync::Arc;

use super::Renderer;
use super::input::PointerMailbox;
use crate::sim::{Outcome, SimulationCore, Snapshot};
use crate::tuning::Tuning;

/// Drives a [`SimulationCore`] from a pointer mailbox into a renderer
pub struct FrameLoop<R: Renderer> {
    core: SimulationCore,
    pointer: Arc<PointerMailbox>,
    renderer: R,
    /// Outcome seen on the previous frame, for transition logging
    last_outcome: Outcome,
    restarts: u32,
}

impl<R: Renderer> FrameLoop<R> {
    pub fn new(tuning: Tuning, renderer: R) -> Self {
        Self {
            core: SimulationCore::initialize(tuning),
            pointer: Arc::new(PointerMailbox::new()),
            renderer,
            last_outcome: Outcome::InPlay,
            restarts: 0,
        }
    }

    /// Shared handle for event sources on other threads
    pub fn pointer(&self) -> Arc<PointerMailbox> {
        Arc::clone(&self.pointer)
    }

    /// Pointer-move callback: x relative to the arena's left edge, unclamped
    pub fn on_pointer_move(&self, x: f32) {
        self.pointer.post(x);
    }

    /// Run one tick and render it
    pub fn frame(&mut self) -> Snapshot {
        if let Some(x) = self.pointer.take() {
            self.core.set_paddle_target(x);
        }

        let snapshot = self.core.advance();
        let outcome = snapshot.outcome();
        if outcome != self.last_outcome {
            match outcome {
                Outcome::Won => log::info!("Match won, score {}", snapshot.score),
                Outcome::Lost => log::info!("Match lost, score {}", snapshot.score),
                Outcome::InPlay => {}
            }
            self.last_outcome = outcome;
        }

        self.renderer.render(&snapshot);
        snapshot
    }

    /// Replace the match with a fresh one using the same tuning
    ///
    /// Pending pointer input is kept so the paddle follows the cursor
    /// immediately in the new match.
    pub fn restart(&mut self) -> Snapshot {
        let tuning = self.core.tuning().clone();
        self.core = SimulationCore::initialize(tuning);
        self.last_outcome = Outcome::InPlay;
        self.restarts += 1;
        log::info!("Match restarted ({} so far)", self.restarts);

        let snapshot = self.core.snapshot();
        self.renderer.render(&snapshot);
        snapshot
    }

    pub fn core(&self) -> &SimulationCore {
        &self.core
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }
}
