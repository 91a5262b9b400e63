// crates/engine_shared/src/lib.rs
//! Types shared between the platform layer (`engine_core`) and the games.
//! Nothing in here knows about windows, GPUs or key codes.

pub mod canvas;
pub mod input_types;
pub mod plugin_api;

pub use canvas::{Canvas, Image, Rgb};
pub use input_types::{
    canonical_actions, ActionId, FrameInputState, InputState, ACTION_NOT_FOUND, MAX_AXES,
};
pub use plugin_api::{
    calculate_layout_hash, GameLogic, HostError, HostInterface, StateEnvelope, StateError,
    WindowSpec, SNAPSHOT_MAGIC_HEADER,
};
