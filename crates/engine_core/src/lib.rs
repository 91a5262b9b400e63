// crates/engine_core/src/lib.rs
//! Platform layer: window, input, pixel presentation, audio and the fixed
//! timestep loop that drives an `engine_shared::GameLogic`.

// Logic Modules
pub mod app;
pub mod assets;
pub mod audio;
pub mod canvas;
pub mod engine_loop;
pub mod error;
pub mod headless;
pub mod host;
pub mod input;
pub mod replay;
pub mod session;

// Window / GPU
pub mod gui;
mod inspector;
mod platform_runner;
mod renderer;

// Re-export App so the launcher crate can find it easily
pub use app::{App, RunOptions};
pub use canvas::PixelCanvas;
pub use error::EngineError;
pub use headless::HeadlessReport;
pub use replay::InputTape;
