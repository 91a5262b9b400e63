// crates/engine_pool/src/storage.rs
use serde::{Deserialize, Serialize};

/// One fixed storage cell. When `alive` is false, `value` holds whatever the
/// previous occupant left behind and must not be read.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct Slot<T> {
    pub value: T,
    pub alive: bool,
}

impl<T: Default> Default for Slot<T> {
    fn default() -> Self {
        Self {
            value: T::default(),
            alive: false,
        }
    }
}
