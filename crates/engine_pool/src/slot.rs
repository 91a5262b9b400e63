// crates/engine_pool/src/slot.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of one slot in a [`SlotPool`](crate::SlotPool).
/// Slots are never moved, so an id stays valid for as long as the slot is alive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId {
    index: u32,
}

impl SlotId {
    pub fn new(index: u32) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.index)
    }
}
