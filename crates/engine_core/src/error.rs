// crates/engine_core/src/error.rs

use engine_shared::HostError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create render surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no graphics adapter is compatible with the window surface")]
    NoAdapter,

    #[error("failed to acquire graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("tape {path}: {source}")]
    TapeIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("tape could not be decoded: {0}")]
    TapeFormat(#[from] bincode::Error),

    #[error(transparent)]
    Host(#[from] HostError),
}
