// crates/swarm_game/src/systems/mod.rs
pub mod camera;
pub mod player;
pub mod pursuit;
pub mod render;
pub mod spawner;

use glam::IVec2;

/// Clamps a point into `[0, world.x) x [0, world.y)`.
pub fn clamp_to_world(pos: IVec2, world: IVec2) -> IVec2 {
    pos.clamp(IVec2::ZERO, world - IVec2::ONE)
}
