// crates/swarm_game/src/state.rs

use engine_shared::{calculate_layout_hash, StateEnvelope, StateError, SNAPSHOT_MAGIC_HEADER};
use serde::{Deserialize, Serialize};

use crate::config::SwarmConfig;
use crate::swarm::EnemySwarm;
use crate::systems::camera::{update_camera, Camera};
use crate::systems::player::Player;

/// Bump whenever a field is added, removed or reordered below.
pub const CURRENT_STATE_VERSION: u32 = 1;

pub fn current_schema_hash() -> u64 {
    calculate_layout_hash("SwarmState{player,camera,swarm{pool,cadence,rng},frame}")
}

/// Everything that changes while the swarm demo runs. The config is not part
/// of it; a snapshot is only meaningful under the config that produced it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwarmState {
    pub player: Player,
    pub camera: Camera,
    pub swarm: EnemySwarm,
    /// Ticks simulated so far.
    pub frame: u64,
}

impl SwarmState {
    pub fn new(config: &SwarmConfig) -> Self {
        let player = Player::spawn(config);
        let mut camera = Camera::default();
        update_camera(&mut camera, &player, config);

        Self {
            player,
            camera,
            swarm: EnemySwarm::new(config),
            frame: 0,
        }
    }
}

/// Envelope followed by the bincode payload.
pub fn encode_snapshot(state: &SwarmState) -> Result<Vec<u8>, StateError> {
    let envelope = StateEnvelope {
        magic_header: SNAPSHOT_MAGIC_HEADER,
        state_version: CURRENT_STATE_VERSION,
        schema_hash: current_schema_hash(),
    };

    let mut bytes = bincode::serialize(&envelope).map_err(|e| StateError::Corrupt(e.to_string()))?;
    bincode::serialize_into(&mut bytes, state).map_err(|e| StateError::Corrupt(e.to_string()))?;
    Ok(bytes)
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<SwarmState, StateError> {
    let mut reader = bytes;
    let envelope: StateEnvelope =
        bincode::deserialize_from(&mut reader).map_err(|_| StateError::BadHeader)?;

    if envelope.magic_header != SNAPSHOT_MAGIC_HEADER {
        return Err(StateError::BadHeader);
    }
    if envelope.schema_hash != current_schema_hash() {
        return Err(StateError::SchemaMismatch {
            expected: current_schema_hash(),
            found: envelope.schema_hash,
        });
    }
    if envelope.state_version != CURRENT_STATE_VERSION {
        return Err(StateError::VersionMismatch {
            expected: CURRENT_STATE_VERSION,
            found: envelope.state_version,
        });
    }

    bincode::deserialize_from(&mut reader).map_err(|e| StateError::Corrupt(e.to_string()))
}
