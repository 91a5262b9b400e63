// crates/engine_core/src/input/map.rs
use std::collections::HashMap;

use engine_shared::ActionId;
use winit::keyboard::KeyCode;

/// Physical key -> action. Several keys may drive the same action.
#[derive(Default, Clone, Debug)]
pub struct InputMap {
    key_bindings: HashMap<KeyCode, ActionId>,
}

impl InputMap {
    pub fn bind(&mut self, key: KeyCode, action: ActionId) {
        self.key_bindings.insert(key, action);
    }

    pub fn map_signal_to_intent(&self, key: KeyCode) -> Option<ActionId> {
        self.key_bindings.get(&key).copied()
    }

    /// Keys bound to `action`, in no particular order.
    pub fn keys_for(&self, action: ActionId) -> impl Iterator<Item = KeyCode> + '_ {
        self.key_bindings
            .iter()
            .filter(move |(_, &bound)| bound == action)
            .map(|(&key, _)| key)
    }
}
