// crates/engine_shared/src/plugin_api.rs
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Image};
use crate::input_types::{ActionId, InputState};

// ==================================================================================
// 1. ERRORS
// ==================================================================================

/// Failures a host can report back to a game.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("failed to load image {path}: {reason}")]
    ImageLoad { path: String, reason: String },

    #[error("image buffer has {actual} bytes, expected {expected}")]
    ImageSize { expected: usize, actual: usize },

    #[error("failed to load sound {path}: {reason}")]
    SoundLoad { path: String, reason: String },
}

/// Failures while saving or restoring game state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("this game does not support state snapshots")]
    Unsupported,

    #[error("snapshot header is corrupt or missing")]
    BadHeader,

    #[error("snapshot schema {found:#018x} does not match {expected:#018x}")]
    SchemaMismatch { expected: u64, found: u64 },

    #[error("snapshot version {found} is not supported (current {expected})")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("snapshot payload could not be decoded: {0}")]
    Corrupt(String),
}

// ==================================================================================
// 2. STRUCTURAL HASHING (The "Handshake")
// ==================================================================================

pub const SNAPSHOT_MAGIC_HEADER: u64 = 0x5357_524D_534E_4150; // "SWRMSNAP"

/// Header written in front of every state snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEnvelope {
    pub magic_header: u64,
    pub state_version: u32,
    pub schema_hash: u64,
}

/// Stable FNV-1a hash of a schema name, used to refuse snapshots written by
/// a different state layout.
pub fn calculate_layout_hash(type_name: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    for b in type_name.bytes() {
        hash ^= b as u64;
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

// ==================================================================================
// 3. HOST INTERFACE
// ==================================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSpec {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

/// Services the platform layer offers to a running game.
pub trait HostInterface {
    /// Resolve a logical action name, or `ACTION_NOT_FOUND`.
    fn action_id(&self, name: &str) -> ActionId;

    fn load_image(&mut self, path: &str) -> Result<Image, HostError>;

    /// Decode a sound up front so the first `play_sound` does not stall.
    fn load_sound(&mut self, path: &str) -> Result<(), HostError>;

    /// Fire-and-forget; unknown or failing sounds are logged by the host.
    fn play_sound(&mut self, path: &str);

    /// Loop `path` as background music, replacing any current track.
    fn play_music(&mut self, path: &str);
}

// ==================================================================================
// 4. GAME API
// ==================================================================================

pub trait GameLogic {
    fn window(&self) -> WindowSpec;

    fn on_load(&mut self, host: &mut dyn HostInterface) -> Result<(), HostError>;

    /// One fixed simulation step.
    fn update(&mut self, host: &mut dyn HostInterface, input: &InputState, dt: f32);

    fn render(&self, canvas: &mut dyn Canvas);

    fn on_unload(&mut self) {}

    /// Key/value pairs shown in the inspector overlay.
    fn inspect(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn save_state(&self) -> Result<Vec<u8>, StateError> {
        Err(StateError::Unsupported)
    }

    fn load_state(&mut self, _bytes: &[u8]) -> Result<(), StateError> {
        Err(StateError::Unsupported)
    }
}
