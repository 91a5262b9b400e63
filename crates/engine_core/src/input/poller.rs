// crates/engine_core/src/input/poller.rs

use engine_shared::canonical_actions::{MOVE_DOWN, MOVE_LEFT, MOVE_RIGHT, MOVE_UP};
use engine_shared::InputState;
use glam::Vec2;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::InputMap;

/// Low-level input collector that tracks held physical keys.
/// This keeps raw device state out of App / PlatformRunner.
#[derive(Default)]
pub struct InputPoller {
    active_keys: Vec<KeyCode>,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single winit WindowEvent and update internal key state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.handle_keyboard_input(key_event)
            }
            // Keys released while unfocused never report; drop them all.
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    fn handle_keyboard_input(&mut self, key_event: &KeyEvent) {
        if let PhysicalKey::Code(keycode) = key_event.physical_key {
            match key_event.state {
                ElementState::Pressed => self.press(keycode),
                ElementState::Released => self.release(keycode),
            }
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        if !self.active_keys.contains(&key) {
            self.active_keys.push(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.active_keys.retain(|&k| k != key);
    }

    pub fn release_all(&mut self) {
        self.active_keys.clear();
    }

    pub fn is_key_active(&self, key: KeyCode) -> bool {
        self.active_keys.contains(&key)
    }

    /// Folds held keys into the per-tick snapshot handed to the game.
    ///
    /// Axis 0/1 carry the movement direction in screen space (+y is down),
    /// normalised so diagonals are not faster than straight lines.
    pub fn resolve(&self, input_map: &InputMap) -> InputState {
        let mut state = InputState::default();
        for &key in &self.active_keys {
            if let Some(action_id) = input_map.map_signal_to_intent(key) {
                state.set_active(action_id, true);
            }
        }

        let mut axis = Vec2::ZERO;
        if state.is_active(MOVE_LEFT) { axis.x -= 1.0; }
        if state.is_active(MOVE_RIGHT) { axis.x += 1.0; }
        if state.is_active(MOVE_UP) { axis.y -= 1.0; }
        if state.is_active(MOVE_DOWN) { axis.y += 1.0; }

        let axis = axis.normalize_or_zero();
        state.analog_axes[0] = axis.x;
        state.analog_axes[1] = axis.y;
        state
    }
}
