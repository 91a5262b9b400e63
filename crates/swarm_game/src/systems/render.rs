// crates/swarm_game/src/systems/render.rs

use engine_shared::{Canvas, Rgb};
use glam::IVec2;

use super::camera::Camera;
use super::player::Player;
use super::spawner::EnemyPool;
use crate::config::SwarmConfig;

pub const BACKGROUND_DOT: Rgb = Rgb::new(40, 40, 40);
pub const ENEMY_COLOR: Rgb = Rgb::new(240, 240, 240);
pub const PLAYER_COLOR: Rgb = Rgb::new(255, 60, 60);

const GRID_STEP: usize = 8;

pub fn draw_background(canvas: &mut dyn Canvas) {
    for y in (0..canvas.height() as i32).step_by(GRID_STEP) {
        for x in (0..canvas.width() as i32).step_by(GRID_STEP) {
            canvas.draw(x, y, BACKGROUND_DOT);
        }
    }
}

/// 3x3 block centred on `center`; the canvas drops pixels that fall outside.
fn fill3(canvas: &mut dyn Canvas, center: IVec2, color: Rgb) {
    for y in center.y - 1..=center.y + 1 {
        for x in center.x - 1..=center.x + 1 {
            canvas.draw(x, y, color);
        }
    }
}

pub fn draw_enemies(canvas: &mut dyn Canvas, pool: &EnemyPool, camera: &Camera, config: &SwarmConfig) {
    let view = config.viewport_size;
    pool.for_each_alive(|_, enemy| {
        let s = camera.to_screen(enemy.pos);
        // Skip anything whose block cannot touch the screen.
        if s.x >= -2 && s.x < view.x + 2 && s.y >= -2 && s.y < view.y + 2 {
            fill3(canvas, s, ENEMY_COLOR);
        }
    });
}

pub fn draw_player(canvas: &mut dyn Canvas, player: &Player, camera: &Camera, config: &SwarmConfig) {
    let origin = camera.to_screen(player.pos);
    for yy in 0..config.player_size {
        for xx in 0..config.player_size {
            canvas.draw(origin.x + xx, origin.y + yy, PLAYER_COLOR);
        }
    }
}
