// crates/engine_core/src/input/config.rs

use engine_shared::canonical_actions::{self, NAMES};
use winit::keyboard::KeyCode;

use crate::input::{ActionRegistry, InputMap};

/// Centralized defaults for input configuration.
/// This keeps App::new small and makes it easy to tweak.
pub struct InputDefaults;

impl InputDefaults {
    /// Registers every canonical action and its default key bindings.
    ///
    /// Actions are registered in `NAMES` order so their numeric ids match
    /// the `canonical_actions` constants.
    pub fn setup(registry: &mut ActionRegistry, input_map: &mut InputMap) {
        for (expected, name) in NAMES.iter().enumerate() {
            let id = registry.register(name);
            // Debug-only to avoid panics in Release.
            debug_assert_eq!(id as usize, expected, "action {name} registered out of order");
        }

        use canonical_actions::*;
        let bindings = [
            (KeyCode::ArrowUp, MOVE_UP),
            (KeyCode::KeyW, MOVE_UP),
            (KeyCode::ArrowDown, MOVE_DOWN),
            (KeyCode::KeyS, MOVE_DOWN),
            (KeyCode::ArrowLeft, MOVE_LEFT),
            (KeyCode::KeyA, MOVE_LEFT),
            (KeyCode::ArrowRight, MOVE_RIGHT),
            (KeyCode::KeyD, MOVE_RIGHT),
            (KeyCode::Escape, QUIT),
            (KeyCode::F1, TOGGLE_INSPECTOR),
            (KeyCode::F5, SAVE_SNAPSHOT),
            (KeyCode::F9, LOAD_SNAPSHOT),
        ];
        for (key, action) in bindings {
            input_map.bind(key, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_ids_match_canonical_constants() {
        let mut registry = ActionRegistry::default();
        let mut map = InputMap::default();
        InputDefaults::setup(&mut registry, &mut map);

        assert_eq!(registry.get_id("MoveUp"), Some(canonical_actions::MOVE_UP));
        assert_eq!(registry.get_id("LoadSnapshot"), Some(canonical_actions::LOAD_SNAPSHOT));
        assert_eq!(registry.len(), NAMES.len());

        let mut up_keys: Vec<_> = map.keys_for(canonical_actions::MOVE_UP).collect();
        up_keys.sort_by_key(|k| format!("{k:?}"));
        assert_eq!(up_keys, vec![KeyCode::ArrowUp, KeyCode::KeyW]);
        assert_eq!(map.map_signal_to_intent(KeyCode::F9), Some(canonical_actions::LOAD_SNAPSHOT));
    }
}
