// crates/swarm_game/src/systems/player.rs
use engine_shared::{ActionId, InputState};
use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::config::SwarmConfig;

const DIAGONAL_SCALE: f32 = 0.7071;

/// Top-left corner of the player's square, in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
}

impl Player {
    /// Starts in the middle of the world.
    pub fn spawn(config: &SwarmConfig) -> Self {
        Self {
            pos: config.world_size / 2,
        }
    }

    pub fn center(&self, config: &SwarmConfig) -> IVec2 {
        self.pos + IVec2::splat(config.player_size / 2)
    }
}

/// `actions` is `[up, down, left, right]`.
pub fn update_player(
    player: &mut Player,
    input: &InputState,
    actions: &[ActionId; 4],
    config: &SwarmConfig,
) {
    let [up, down, left, right] = *actions;
    let mut dir = IVec2::ZERO;

    if input.is_active(left) { dir.x -= 1; }
    if input.is_active(right) { dir.x += 1; }
    if input.is_active(up) { dir.y -= 1; }
    if input.is_active(down) { dir.y += 1; }

    if dir != IVec2::ZERO {
        let mut velocity = dir * config.player_speed;
        // Keep diagonal movement from outrunning straight movement.
        if dir.x != 0 && dir.y != 0 {
            velocity = (velocity.as_vec2() * DIAGONAL_SCALE).as_ivec2();
        }
        player.pos += velocity;
    }

    let max = config.world_size - IVec2::splat(config.player_size);
    player.pos = player.pos.clamp(IVec2::ZERO, max);
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_shared::canonical_actions::{MOVE_DOWN, MOVE_LEFT, MOVE_RIGHT, MOVE_UP};

    const ACTIONS: [ActionId; 4] = [MOVE_UP, MOVE_DOWN, MOVE_LEFT, MOVE_RIGHT];

    fn input(held: &[ActionId]) -> InputState {
        let mut state = InputState::default();
        for &action in held {
            state.set_active(action, true);
        }
        state
    }

    #[test]
    fn starts_in_the_middle_of_the_world() {
        let config = SwarmConfig::default();
        let player = Player::spawn(&config);
        assert_eq!(player.pos, IVec2::new(1500, 1500));
        assert_eq!(player.center(&config), IVec2::new(1510, 1510));
    }

    #[test]
    fn straight_and_diagonal_steps() {
        let config = SwarmConfig::default();
        let mut player = Player::spawn(&config);

        update_player(&mut player, &input(&[MOVE_RIGHT]), &ACTIONS, &config);
        assert_eq!(player.pos, IVec2::new(1504, 1500));

        update_player(&mut player, &input(&[MOVE_UP, MOVE_LEFT]), &ACTIONS, &config);
        assert_eq!(player.pos, IVec2::new(1502, 1498));
    }

    #[test]
    fn opposite_keys_cancel_out() {
        let config = SwarmConfig::default();
        let mut player = Player::spawn(&config);
        update_player(&mut player, &input(&[MOVE_LEFT, MOVE_RIGHT]), &ACTIONS, &config);
        assert_eq!(player.pos, IVec2::new(1500, 1500));
    }

    #[test]
    fn clamped_so_the_whole_square_stays_in_the_world() {
        let config = SwarmConfig::default();
        let mut player = Player { pos: IVec2::new(2979, 1) };
        update_player(&mut player, &input(&[MOVE_RIGHT, MOVE_UP]), &ACTIONS, &config);
        assert_eq!(player.pos, IVec2::new(2980, 0));
    }
}
