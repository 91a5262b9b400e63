// crates/swarm_game/src/systems/camera.rs

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::config::SwarmConfig;

/// World-space position of the viewport's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub pos: IVec2,
}

impl Camera {
    pub fn to_screen(&self, world_pos: IVec2) -> IVec2 {
        world_pos - self.pos
    }

    pub fn to_world(&self, screen_pos: IVec2) -> IVec2 {
        screen_pos + self.pos
    }
}

/// Centres the viewport on the player, then keeps it inside the world.
pub fn update_camera(camera: &mut Camera, player: &Player, config: &SwarmConfig) {
    let target = player.center(config) - config.viewport_size / 2;
    let max = config.world_size - config.viewport_size;
    camera.pos = target.clamp(IVec2::ZERO, max);
}
