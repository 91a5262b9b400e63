// crates/engine_core/src/input/mod.rs
pub mod config;
pub mod map;
pub mod poller;
pub mod registry;

pub use config::InputDefaults;
pub use map::InputMap;
pub use poller::InputPoller;
pub use registry::ActionRegistry;
