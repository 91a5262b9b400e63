// crates/swarm_game/tests/swarm_run.rs
//! Whole-run properties of the swarm demo, driven through `GameLogic` the way
//! the platform runner drives it.

use engine_shared::canonical_actions::{self, MOVE_DOWN, MOVE_LEFT, MOVE_RIGHT, MOVE_UP};
use engine_shared::{
    ActionId, FrameInputState, GameLogic, HostError, HostInterface, Image, InputState,
    ACTION_NOT_FOUND,
};
use glam::IVec2;
use swarm_game::{SwarmConfig, SwarmGame};

struct TestHost;

impl HostInterface for TestHost {
    fn action_id(&self, name: &str) -> ActionId {
        canonical_actions::NAMES
            .iter()
            .position(|n| *n == name)
            .map_or(ACTION_NOT_FOUND, |i| i as ActionId)
    }

    fn load_image(&mut self, path: &str) -> Result<Image, HostError> {
        Err(HostError::ImageLoad {
            path: path.to_string(),
            reason: "not available".to_string(),
        })
    }

    fn load_sound(&mut self, _path: &str) -> Result<(), HostError> {
        Ok(())
    }

    fn play_sound(&mut self, _path: &str) {}

    fn play_music(&mut self, _path: &str) {}
}

const DT: f32 = 1.0 / 60.0;

/// Scripted walk that sweeps the player into every corner of the world.
fn scripted_input(tick: u64) -> InputState {
    let held: &[ActionId] = match (tick / 400) % 4 {
        0 => &[MOVE_LEFT, MOVE_UP],
        1 => &[MOVE_RIGHT],
        2 => &[MOVE_DOWN],
        _ => &[MOVE_LEFT],
    };
    let mut input = InputState::default();
    for &action in held {
        input.set_active(action, true);
    }
    input
}

fn started(config: SwarmConfig) -> SwarmGame {
    let mut game = SwarmGame::new(config);
    game.on_load(&mut TestHost).expect("swarm load never touches assets");
    game
}

fn enemy_positions(game: &SwarmGame) -> Vec<(usize, IVec2, i32)> {
    game.state()
        .swarm
        .pool()
        .iter_alive()
        .map(|(id, e)| (id.index(), e.pos, e.speed))
        .collect()
}

#[test]
fn enemies_and_player_stay_in_the_world() {
    let config = SwarmConfig::default();
    let world = config.world_size;
    let mut game = started(config.clone());

    for tick in 0..6_000 {
        game.update(&mut TestHost, &scripted_input(tick), DT);

        let state = game.state();
        let pool = state.swarm.pool();
        assert!(pool.alive_count() <= pool.capacity());
        for (_, enemy) in pool.iter_alive() {
            assert!(enemy.pos.cmpge(IVec2::ZERO).all() && enemy.pos.cmplt(world).all());
        }
        assert!(state.player.pos.cmpge(IVec2::ZERO).all());
        assert!(state.player.pos.cmple(world - IVec2::splat(config.player_size)).all());
        assert!(state.camera.pos.cmple(world - config.viewport_size).all());
    }
}

#[test]
fn pool_fills_up_and_stays_full() {
    let config = SwarmConfig {
        capacity: 25,
        ..SwarmConfig::default()
    };
    let mut game = started(config);
    let idle = InputState::default();

    for _ in 0..5_000 {
        game.update(&mut TestHost, &idle, DT);
    }
    let pool = game.state().swarm.pool();
    assert_eq!(pool.alive_count(), 25);
    assert!(pool.is_full());

    let rng_before = *game.state().swarm.rng();
    for _ in 0..200 {
        game.update(&mut TestHost, &idle, DT);
    }
    assert_eq!(*game.state().swarm.rng(), rng_before);
    assert_eq!(game.state().swarm.pool().alive_count(), 25);
}

#[test]
fn same_seed_and_inputs_give_the_same_run() {
    let mut a = started(SwarmConfig::default());
    let mut b = started(SwarmConfig::default());

    for tick in 0..2_000 {
        let input = scripted_input(tick);
        a.update(&mut TestHost, &input, DT);
        b.update(&mut TestHost, &input, DT);
    }
    assert_eq!(enemy_positions(&a), enemy_positions(&b));
    assert_eq!(a.state().player, b.state().player);
}

#[test]
fn different_seeds_diverge() {
    let mut a = started(SwarmConfig::default());
    let mut b = started(SwarmConfig {
        seed: 99,
        ..SwarmConfig::default()
    });
    for tick in 0..500 {
        let input = scripted_input(tick);
        a.update(&mut TestHost, &input, DT);
        b.update(&mut TestHost, &input, DT);
    }
    assert_ne!(enemy_positions(&a), enemy_positions(&b));
}

#[test]
fn recorded_frames_replay_to_the_same_state() {
    let mut live = started(SwarmConfig::default());
    let mut tape = Vec::new();
    for tick in 0..1_500 {
        let input = scripted_input(tick);
        tape.push(FrameInputState::from_state(tick, &input));
        live.update(&mut TestHost, &input, DT);
    }

    let encoded = bincode::serialize(&tape).unwrap();
    let decoded: Vec<FrameInputState> = bincode::deserialize(&encoded).unwrap();

    let mut replay = started(SwarmConfig::default());
    for frame in &decoded {
        replay.update(&mut TestHost, &frame.to_state(), DT);
    }
    assert_eq!(enemy_positions(&replay), enemy_positions(&live));
    assert_eq!(replay.state().frame, live.state().frame);
}

#[test]
fn restored_snapshot_continues_identically() {
    let mut original = started(SwarmConfig::default());
    for tick in 0..700 {
        original.update(&mut TestHost, &scripted_input(tick), DT);
    }
    let snapshot = original.save_state().unwrap();

    let mut restored = started(SwarmConfig::default());
    restored.load_state(&snapshot).unwrap();

    for tick in 700..1_400 {
        let input = scripted_input(tick);
        original.update(&mut TestHost, &input, DT);
        restored.update(&mut TestHost, &input, DT);
    }
    assert_eq!(enemy_positions(&original), enemy_positions(&restored));
}
