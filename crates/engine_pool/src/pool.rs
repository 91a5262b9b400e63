// crates/engine_pool/src/pool.rs

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::slot::SlotId;
use crate::storage::Slot;

/// Fixed-capacity pool of `T`. Storage is allocated once; spawning never grows
/// it and a value never changes slot.
#[derive(Clone, Debug, Serialize)]
pub struct SlotPool<T> {
    slots: Vec<Slot<T>>,
    // Every dead index, highest at the bottom, so the top is always the lowest dead slot.
    free_indices: Vec<u32>,
    alive: usize,
}

/// Why serialized pool data was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("pool records {recorded} alive slots but holds {actual}")]
    AliveCount { recorded: usize, actual: usize },
    #[error("free-index stack must list every dead slot exactly once, lowest on top")]
    FreeList,
    #[error("pool capacity {0} does not fit a SlotId")]
    Capacity(usize),
}

/// Wire shape of `SlotPool`, checked before it becomes one.
#[derive(Deserialize)]
struct RawPool<T> {
    slots: Vec<Slot<T>>,
    free_indices: Vec<u32>,
    alive: usize,
}

impl<T> RawPool<T> {
    fn validate(self) -> Result<SlotPool<T>, PoolError> {
        if self.slots.len() > u32::MAX as usize {
            return Err(PoolError::Capacity(self.slots.len()));
        }
        let actual = self.slots.iter().filter(|slot| slot.alive).count();
        if self.alive != actual {
            return Err(PoolError::AliveCount {
                recorded: self.alive,
                actual,
            });
        }
        // Slots are never released one at a time, so the only reachable stack
        // is all dead indices in descending order.
        let expected = (0..self.slots.len())
            .rev()
            .filter(|&index| !self.slots[index].alive)
            .map(|index| index as u32);
        if !self.free_indices.iter().copied().eq(expected) {
            return Err(PoolError::FreeList);
        }
        Ok(SlotPool {
            slots: self.slots,
            free_indices: self.free_indices,
            alive: self.alive,
        })
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SlotPool<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawPool::deserialize(deserializer)?
            .validate()
            .map_err(serde::de::Error::custom)
    }
}

impl<T: Default> SlotPool<T> {
    /// Creates `capacity` dead slots.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= u32::MAX as usize,
            "SlotPool capacity {capacity} does not fit a SlotId"
        );
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Slot::default);

        let mut pool = Self {
            slots,
            free_indices: Vec::with_capacity(capacity),
            alive: 0,
        };
        pool.reset();
        pool
    }
}

impl<T> SlotPool<T> {
    /// Marks every slot dead. Stale values stay in place.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.alive = false;
        }
        self.free_indices.clear();
        self.free_indices
            .extend((0..self.slots.len() as u32).rev());
        self.alive = 0;
    }

    /// The lowest-index dead slot, or `None` when the pool is full.
    pub fn find_free_slot(&self) -> Option<SlotId> {
        self.free_indices.last().copied().map(SlotId::new)
    }

    /// Stores `value` in the slot `find_free_slot` would return.
    /// A full pool drops the value and stays unchanged.
    pub fn spawn(&mut self, value: T) -> Option<SlotId> {
        let index = self.free_indices.pop()?;
        let slot = &mut self.slots[index as usize];
        slot.value = value;
        slot.alive = true;
        self.alive += 1;
        Some(SlotId::new(index))
    }

    pub fn is_alive(&self, id: SlotId) -> bool {
        self.slots.get(id.index()).is_some_and(|slot| slot.alive)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.alive)
            .map(|slot| &slot.value)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.alive)
            .map(|slot| &mut slot.value)
    }

    /// Alive slots in storage order. Re-scans the whole pool on every call.
    pub fn iter_alive(&self) -> impl Iterator<Item = (SlotId, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.alive)
            .map(|(index, slot)| (SlotId::new(index as u32), &slot.value))
    }

    pub fn iter_alive_mut(&mut self) -> impl Iterator<Item = (SlotId, &mut T)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, slot)| slot.alive)
            .map(|(index, slot)| (SlotId::new(index as u32), &mut slot.value))
    }

    pub fn for_each_alive(&self, mut visit: impl FnMut(SlotId, &T)) {
        for (id, value) in self.iter_alive() {
            visit(id, value);
        }
    }

    pub fn alive_count(&self) -> usize {
        self.alive
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.free_indices.is_empty()
    }
}
