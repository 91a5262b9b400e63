// crates/engine_pool/src/lib.rs
//! Fixed-capacity object pool with stable slot indices.
//!
//! The pool allocates all of its storage up front. Dead slots are tracked on
//! a free-index stack so claiming one is O(1), and the stack is kept ordered
//! so the slot handed out is always the lowest dead index, the same answer a
//! front-to-back scan would give.

mod pool;
mod slot;
mod storage;

pub use pool::{PoolError, SlotPool};
pub use slot::SlotId;
