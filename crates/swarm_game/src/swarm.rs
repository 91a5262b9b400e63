// crates/swarm_game/src/swarm.rs

use engine_pool::SlotId;
use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::config::SwarmConfig;
use crate::rng::Lcg;
use crate::systems::camera::Camera;
use crate::systems::pursuit::steer_all;
use crate::systems::spawner::{spawn_offscreen, Enemy, EnemyPool, SpawnCadence, SpawnReport};

/// The enemy side of the simulation: pool, spawn cadence and the generator
/// that decides where enemies appear.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnemySwarm {
    pool: EnemyPool,
    cadence: SpawnCadence,
    rng: Lcg,
}

impl EnemySwarm {
    pub fn new(config: &SwarmConfig) -> Self {
        Self {
            pool: EnemyPool::with_capacity(config.capacity),
            cadence: SpawnCadence::new(config),
            rng: Lcg::new(config.seed),
        }
    }

    /// Kills every enemy and restarts the cadence and generator.
    pub fn reset(&mut self, config: &SwarmConfig) {
        self.pool.reset();
        self.cadence = SpawnCadence::new(config);
        self.rng = Lcg::new(config.seed);
    }

    /// One simulation tick: maybe spawn, then steer everyone (the newcomer
    /// included) toward `target`.
    pub fn tick(
        &mut self,
        camera: &Camera,
        target: IVec2,
        frame: u64,
        config: &SwarmConfig,
    ) -> Option<SpawnReport> {
        let spawned = if self.cadence.tick(frame, config) {
            spawn_offscreen(&mut self.pool, &mut self.rng, camera, config)
        } else {
            None
        };

        steer_all(&mut self.pool, target, config.world_size);
        spawned
    }

    pub fn for_each_alive(&self, f: impl FnMut(SlotId, &Enemy)) {
        self.pool.for_each_alive(f);
    }

    pub fn pool(&self) -> &EnemyPool {
        &self.pool
    }

    pub fn cadence(&self) -> &SpawnCadence {
        &self.cadence
    }

    pub fn rng(&self) -> &Lcg {
        &self.rng
    }
}
