// crates/engine_core/src/host.rs

use engine_shared::{ActionId, HostError, HostInterface, Image};
use tracing::warn;

use crate::assets::AssetRoot;
use crate::audio::AudioSystem;
use crate::input::ActionRegistry;

/// The services the engine hands to a running game.
pub struct EngineHost {
    registry: ActionRegistry,
    assets: AssetRoot,
    audio: AudioSystem,
}

impl EngineHost {
    pub fn new(registry: ActionRegistry, assets: AssetRoot, audio: AudioSystem) -> Self {
        Self {
            registry,
            assets,
            audio,
        }
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }
}

impl HostInterface for EngineHost {
    fn action_id(&self, name: &str) -> ActionId {
        self.registry.resolve(name)
    }

    fn load_image(&mut self, path: &str) -> Result<Image, HostError> {
        self.assets.load_image(path)
    }

    fn load_sound(&mut self, path: &str) -> Result<(), HostError> {
        self.audio.load(path)
    }

    fn play_sound(&mut self, path: &str) {
        self.audio.play(path);
    }

    fn play_music(&mut self, path: &str) {
        if !self.audio.is_loaded(path) {
            if let Err(err) = self.audio.load(path) {
                warn!(%err, "music unavailable");
                return;
            }
        }
        self.audio.play_looped(path);
    }
}
