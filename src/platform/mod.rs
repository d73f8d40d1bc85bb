//! Platform abstraction layer
//!
//! Everything between the simulation and a concrete host:
//! - Input: latest-wins pointer mailbox
//! - Output: the `Renderer` seam
//! - Frame loop tying both to the simulation core

pub mod frame_loop;
pub mod input;

pub use frame_loop::FrameLoop;
pub use input::PointerMailbox;

use crate::sim::Snapshot;

/// Drawing collaborator, called once per frame with a read-only snapshot
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, snapshot: &Snapshot) {
        (**self).render(snapshot);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, snapshot: &Snapshot) {
        (**self).render(snapshot);
    }
}

/// Renderer that draws nothing (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _snapshot: &Snapshot) {}
}
