// crates/swarm_game/src/lib.rs

pub mod config;
pub mod game;
pub mod plane;
pub mod rng;
pub mod state;
pub mod swarm;
pub mod systems;

pub use config::{ConfigError, SwarmConfig};
pub use game::SwarmGame;
pub use plane::PlaneDemo;
pub use rng::Lcg;
pub use state::SwarmState;
pub use swarm::EnemySwarm;
