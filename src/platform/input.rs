//! Pointer input delivery
//!
//! Pointer events can arrive on any thread between ticks. Only the most
//! recent position matters, so input goes through a single slot that each
//! new event overwrites instead of a queue.

use std::sync::atomic::{AtomicU64, Ordering};

/// Set in the high word when the slot holds a value
const PRESENT: u64 = 1 << 32;
const EMPTY: u64 = 0;

/// Single-slot, latest-wins mailbox for the pointer's horizontal position
#[derive(Debug, Default)]
pub struct PointerMailbox {
    slot: AtomicU64,
}

impl PointerMailbox {
    pub fn new() -> Self {
        Self {
            slot: AtomicU64::new(EMPTY),
        }
    }

    /// Store a pointer x, replacing any value not yet taken
    pub fn post(&self, x: f32) {
        self.slot
            .store(PRESENT | u64::from(x.to_bits()), Ordering::Release);
    }

    /// Take the latest pointer x, leaving the slot empty
    pub fn take(&self) -> Option<f32> {
        let raw = self.slot.swap(EMPTY, Ordering::AcqRel);
        (raw & PRESENT != 0).then(|| f32::from_bits(raw as u32))
    }

    /// Latest pointer x without clearing the slot
    pub fn peek(&self) -> Option<f32> {
        let raw = self.slot.load(Ordering::Acquire);
        (raw & PRESENT != 0).then(|| f32::from_bits(raw as u32))
    }
}
