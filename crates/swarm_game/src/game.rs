// crates/swarm_game/src/game.rs

use engine_shared::{
    canonical_actions::NAMES, ActionId, Canvas, GameLogic, HostError, HostInterface, InputState,
    StateError, WindowSpec, ACTION_NOT_FOUND,
};
use tracing::{info, warn};

use crate::config::SwarmConfig;
use crate::state::{decode_snapshot, encode_snapshot, SwarmState};
use crate::systems::camera::update_camera;
use crate::systems::player::update_player;
use crate::systems::render::{draw_background, draw_enemies, draw_player};

const MOVE_ACTIONS: [&str; 4] = ["MoveUp", "MoveDown", "MoveLeft", "MoveRight"];

/// Top-down survival demo: the player walks a large world while enemies
/// appear just off screen and home in on them.
pub struct SwarmGame {
    config: SwarmConfig,
    actions: [ActionId; 4],
    state: SwarmState,
}

impl SwarmGame {
    pub fn new(config: SwarmConfig) -> Self {
        let state = SwarmState::new(&config);
        Self {
            config,
            actions: [ACTION_NOT_FOUND; 4],
            state,
        }
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    pub fn state(&self) -> &SwarmState {
        &self.state
    }

    fn bind_actions(&mut self, host: &dyn HostInterface) {
        for (slot, name) in self.actions.iter_mut().zip(MOVE_ACTIONS) {
            debug_assert!(NAMES.contains(&name));
            *slot = host.action_id(name);
            if *slot == ACTION_NOT_FOUND {
                warn!(action = name, "host has no binding for action");
            }
        }
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self, input: &InputState) {
        let config = &self.config;
        let state = &mut self.state;

        update_player(&mut state.player, input, &self.actions, config);
        update_camera(&mut state.camera, &state.player, config);

        let target = state.player.center(config);
        state.swarm.tick(&state.camera, target, state.frame, config);
        state.frame += 1;
    }
}

impl Default for SwarmGame {
    fn default() -> Self {
        Self::new(SwarmConfig::default())
    }
}

impl GameLogic for SwarmGame {
    fn window(&self) -> WindowSpec {
        WindowSpec {
            width: self.config.viewport_size.x as u32,
            height: self.config.viewport_size.y as u32,
            title: "Enemies: offscreen spawn + chase".to_string(),
        }
    }

    fn on_load(&mut self, host: &mut dyn HostInterface) -> Result<(), HostError> {
        self.bind_actions(host);
        self.state = SwarmState::new(&self.config);
        info!(
            capacity = self.config.capacity,
            seed = self.config.seed,
            "swarm loaded"
        );
        Ok(())
    }

    fn update(&mut self, _host: &mut dyn HostInterface, input: &InputState, _dt: f32) {
        self.step(input);
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear();
        draw_background(canvas);
        draw_enemies(canvas, self.state.swarm.pool(), &self.state.camera, &self.config);
        draw_player(canvas, &self.state.player, &self.state.camera, &self.config);
    }

    fn on_unload(&mut self) {
        info!(
            frames = self.state.frame,
            enemies = self.state.swarm.pool().alive_count(),
            "swarm unloaded"
        );
    }

    fn inspect(&self) -> Vec<(&'static str, String)> {
        let state = &self.state;
        let pool = state.swarm.pool();
        vec![
            ("frame", state.frame.to_string()),
            ("player", format!("{}", state.player.pos)),
            ("camera", format!("{}", state.camera.pos)),
            ("enemies", format!("{}/{}", pool.alive_count(), pool.capacity())),
            ("spawn interval", state.swarm.cadence().interval().to_string()),
            ("next spawn in", state.swarm.cadence().timer().to_string()),
            ("rng state", format!("{:#010x}", state.swarm.rng().state())),
        ]
    }

    fn save_state(&self) -> Result<Vec<u8>, StateError> {
        encode_snapshot(&self.state)
    }

    fn load_state(&mut self, bytes: &[u8]) -> Result<(), StateError> {
        let state = decode_snapshot(bytes)?;
        if state.swarm.pool().capacity() != self.config.capacity {
            return Err(StateError::Corrupt(format!(
                "snapshot pool holds {} slots, config expects {}",
                state.swarm.pool().capacity(),
                self.config.capacity
            )));
        }
        self.state = state;
        info!(frame = self.state.frame, "swarm state restored");
        Ok(())
    }
}
