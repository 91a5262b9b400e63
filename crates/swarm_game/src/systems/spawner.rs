// crates/swarm_game/src/systems/spawner.rs

//! Offscreen enemy spawning and the difficulty cadence that drives it.

use engine_pool::{SlotId, SlotPool};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::camera::Camera;
use super::clamp_to_world;
use crate::config::SwarmConfig;
use crate::rng::Lcg;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: IVec2,
    /// Pixels per tick, fixed at spawn.
    pub speed: i32,
}

pub type EnemyPool = SlotPool<Enemy>;

/// Viewport edge an enemy enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    fn from_roll(roll: u32) -> Self {
        match roll % 4 {
            0 => Edge::Left,
            1 => Edge::Right,
            2 => Edge::Top,
            _ => Edge::Bottom,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnReport {
    pub slot: SlotId,
    pub edge: Edge,
    /// Spawn point relative to the viewport, before world clamping.
    pub screen: IVec2,
    /// Final position after clamping into the world.
    pub world: IVec2,
    pub speed: i32,
}

/// Places one enemy just beyond a random viewport edge.
///
/// A full pool is a silent no-op and leaves the generator untouched.
pub fn spawn_offscreen(
    pool: &mut EnemyPool,
    rng: &mut Lcg,
    camera: &Camera,
    config: &SwarmConfig,
) -> Option<SpawnReport> {
    pool.find_free_slot()?;

    let margin = config.spawn_margin;
    let view = config.viewport_size;
    let edge = Edge::from_roll(rng.next_u15());

    let mut perpendicular = |extent: i32| rng.below((extent + 2 * margin) as u32) as i32 - margin;
    let screen = match edge {
        Edge::Left => IVec2::new(-margin, perpendicular(view.y)),
        Edge::Right => IVec2::new(view.x + margin, perpendicular(view.y)),
        Edge::Top => IVec2::new(perpendicular(view.x), -margin),
        Edge::Bottom => IVec2::new(perpendicular(view.x), view.y + margin),
    };

    // Near a world edge this can land on-screen; accepted.
    let world = clamp_to_world(camera.to_world(screen), config.world_size);
    let speed_span = (config.speed_max - config.speed_min + 1) as u32;
    let speed = config.speed_min + rng.below(speed_span) as i32;

    let slot = pool.spawn(Enemy { pos: world, speed })?;
    trace!(?slot, ?edge, x = world.x, y = world.y, speed, "enemy spawned");

    Some(SpawnReport {
        slot,
        edge,
        screen,
        world,
        speed,
    })
}

/// Countdown that fires a spawn every `interval` ticks, with the interval
/// shrinking by one every `decay_period` ticks down to the floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnCadence {
    timer: i32,
    interval: i32,
}

impl SpawnCadence {
    /// The first tick always spawns.
    pub fn new(config: &SwarmConfig) -> Self {
        Self {
            timer: 0,
            interval: config.initial_interval,
        }
    }

    /// Advances one tick. Returns true when a spawn is due.
    pub fn tick(&mut self, frame: u64, config: &SwarmConfig) -> bool {
        if frame > 0
            && frame % config.decay_period == 0
            && self.interval > config.floor_interval
        {
            self.interval -= 1;
            debug!(frame, interval = self.interval, "spawn interval shortened");
        }

        self.timer -= 1;
        if self.timer <= 0 {
            self.timer = self.interval;
            true
        } else {
            false
        }
    }

    pub fn interval(&self) -> i32 {
        self.interval
    }

    /// Ticks until the next spawn.
    pub fn timer(&self) -> i32 {
        self.timer
    }
}
