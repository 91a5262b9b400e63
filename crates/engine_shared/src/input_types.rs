// crates/engine_shared/src/input_types.rs
//! Compact input types shared by the platform layer and the games, also used for replay.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable Integer ID for Actions
pub type ActionId = u32;
pub const ACTION_NOT_FOUND: ActionId = u32::MAX;

/// Maximum number of analog axes carried in a snapshot
pub const MAX_AXES: usize = 8;

/// Actions every host registers first, in this order, so their IDs are stable
/// across runs and recorded tapes stay valid.
pub mod canonical_actions {
    use super::ActionId;

    pub const MOVE_UP: ActionId = 0;
    pub const MOVE_DOWN: ActionId = 1;
    pub const MOVE_LEFT: ActionId = 2;
    pub const MOVE_RIGHT: ActionId = 3;
    pub const QUIT: ActionId = 4;
    pub const TOGGLE_INSPECTOR: ActionId = 5;
    pub const SAVE_SNAPSHOT: ActionId = 6;
    pub const LOAD_SNAPSHOT: ActionId = 7;

    /// Logical names, indexed by ID.
    pub const NAMES: [&str; 8] = [
        "MoveUp",
        "MoveDown",
        "MoveLeft",
        "MoveRight",
        "Quit",
        "ToggleInspector",
        "SaveSnapshot",
        "LoadSnapshot",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    /// Bitmask for up to 64 digital actions.
    pub digital_mask: u64,

    /// Fixed-size analog axes. Axis 0/1 hold the resolved movement vector.
    pub analog_axes: [f32; MAX_AXES],
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            digital_mask: 0,
            analog_axes: [0.0; MAX_AXES],
        }
    }
}

impl InputState {
    /// Safe check; returns false for out-of-range ids (including ACTION_NOT_FOUND).
    pub fn is_active(&self, action_id: ActionId) -> bool {
        if (action_id as usize) >= 64 {
            return false;
        }
        (self.digital_mask & (1u64 << action_id)) != 0
    }

    /// Out-of-range ids are ignored.
    pub fn set_active(&mut self, action_id: ActionId, active: bool) {
        if (action_id as usize) >= 64 {
            return;
        }
        if active {
            self.digital_mask |= 1u64 << action_id;
        } else {
            self.digital_mask &= !(1u64 << action_id);
        }
    }

    pub fn get_axis(&self, axis_index: usize) -> f32 {
        if axis_index >= MAX_AXES {
            0.0
        } else {
            self.analog_axes[axis_index]
        }
    }

    pub fn move_vector(&self) -> Vec2 {
        Vec2::new(self.analog_axes[0], self.analog_axes[1])
    }

    /// True if `action_id` is held now but was not in `previous`.
    pub fn just_pressed(&self, previous: &InputState, action_id: ActionId) -> bool {
        self.is_active(action_id) && !previous.is_active(action_id)
    }
}

/// Compact, deterministic per-tick input record used for replay.
/// - `tick`: simulation tick index
/// - `actions`: u64 bitmask of resolved digital intents
/// - `move_vector`: quantized fixed-point vector (x,y) where value = axis * 1000
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInputState {
    pub tick: u64,
    pub actions: u64,
    pub move_vector: [i16; 2],
}

impl FrameInputState {
    const AXIS_SCALE: f32 = 1000.0;

    /// Quantizes the analog axes to fixed-point so the record is bit-stable.
    pub fn from_state(tick: u64, state: &InputState) -> Self {
        let raw_x = (state.analog_axes[0] * Self::AXIS_SCALE).round();
        let raw_y = (state.analog_axes[1] * Self::AXIS_SCALE).round();

        Self {
            tick,
            actions: state.digital_mask,
            move_vector: [clamp_i16(raw_x as i64), clamp_i16(raw_y as i64)],
        }
    }

    pub fn to_state(&self) -> InputState {
        let mut state = InputState {
            digital_mask: self.actions,
            ..Default::default()
        };
        state.analog_axes[0] = f32::from(self.move_vector[0]) / Self::AXIS_SCALE;
        state.analog_axes[1] = f32::from(self.move_vector[1]) / Self::AXIS_SCALE;
        state
    }
}

/// Helper: clamp an i64 into i16 range and return i16.
fn clamp_i16(v: i64) -> i16 {
    v.clamp(i16::MIN as i64, i16::MAX as i64) as i16
}
