// crates/engine_core/src/audio.rs
//! Sound effects and looping music. With the `audio` feature sounds go to
//! the default output device through rodio; without it, or when no device
//! is available, playback requests are only logged.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use engine_shared::HostError;
use tracing::{debug, warn};

use crate::assets::AssetRoot;

pub struct AudioSystem {
    assets: AssetRoot,
    /// Encoded file bytes, keyed by the game-relative path.
    clips: HashMap<String, Arc<[u8]>>,
    output: Option<backend::Output>,
}

impl AudioSystem {
    pub fn new(assets: AssetRoot) -> Self {
        Self {
            assets,
            clips: HashMap::new(),
            output: backend::Output::open(),
        }
    }

    /// A system that never touches an audio device, for headless runs.
    pub fn silent(assets: AssetRoot) -> Self {
        Self {
            assets,
            clips: HashMap::new(),
            output: None,
        }
    }

    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }

    pub fn is_loaded(&self, path: &str) -> bool {
        self.clips.contains_key(path)
    }

    pub fn load(&mut self, path: &str) -> Result<(), HostError> {
        if self.clips.contains_key(path) {
            return Ok(());
        }
        let resolved = self.assets.resolve(path);
        let bytes = read_clip(&resolved).map_err(|reason| HostError::SoundLoad {
            path: path.to_string(),
            reason,
        })?;
        debug!(path, bytes = bytes.len(), "sound loaded");
        self.clips.insert(path.to_string(), bytes);
        Ok(())
    }

    pub fn play(&mut self, path: &str) {
        let Some(clip) = self.clip(path) else {
            return;
        };
        match &mut self.output {
            Some(output) => output.play(path, clip, false),
            None => debug!(path, "sound (no output)"),
        }
    }

    pub fn play_looped(&mut self, path: &str) {
        let Some(clip) = self.clip(path) else {
            return;
        };
        match &mut self.output {
            Some(output) => output.play(path, clip, true),
            None => debug!(path, "music (no output)"),
        }
    }

    /// Loads on first use so unpreloaded sounds still play.
    fn clip(&mut self, path: &str) -> Option<Arc<[u8]>> {
        if let Err(err) = self.load(path) {
            warn!(%err, "cannot play sound");
            return None;
        }
        self.clips.get(path).cloned()
    }
}

fn read_clip(path: &Path) -> Result<Arc<[u8]>, String> {
    std::fs::read(path)
        .map(Arc::from)
        .map_err(|e| format!("{}: {e}", path.display()))
}

#[cfg(feature = "audio")]
mod backend {
    use std::io::Cursor;
    use std::sync::Arc;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
    use tracing::{info, warn};

    pub struct Output {
        // Must outlive every sink.
        _stream: OutputStream,
        handle: OutputStreamHandle,
        music: Option<Sink>,
    }

    impl Output {
        pub fn open() -> Option<Self> {
            match OutputStream::try_default() {
                Ok((stream, handle)) => {
                    info!("audio output opened");
                    Some(Self {
                        _stream: stream,
                        handle,
                        music: None,
                    })
                }
                Err(err) => {
                    warn!(%err, "no audio output, sounds disabled");
                    None
                }
            }
        }

        pub fn play(&mut self, path: &str, clip: Arc<[u8]>, looped: bool) {
            let cursor = Cursor::new(clip);
            if looped {
                let result = Decoder::new_looped(cursor)
                    .map_err(|e| e.to_string())
                    .and_then(|source| {
                        let sink = Sink::try_new(&self.handle).map_err(|e| e.to_string())?;
                        sink.append(source);
                        Ok(sink)
                    });
                match result {
                    // Replacing the sink stops the previous track.
                    Ok(sink) => self.music = Some(sink),
                    Err(err) => warn!(path, %err, "music playback failed"),
                }
            } else {
                let result = Decoder::new(cursor)
                    .map_err(|e| e.to_string())
                    .and_then(|source| {
                        self.handle
                            .play_raw(source.convert_samples())
                            .map_err(|e| e.to_string())
                    });
                if let Err(err) = result {
                    warn!(path, %err, "sound playback failed");
                }
            }
        }
    }
}

#[cfg(not(feature = "audio"))]
mod backend {
    use std::sync::Arc;

    use tracing::{debug, info};

    pub struct Output;

    impl Output {
        pub fn open() -> Option<Self> {
            info!("built without the `audio` feature, sounds are logged only");
            Some(Self)
        }

        pub fn play(&mut self, path: &str, clip: Arc<[u8]>, looped: bool) {
            debug!(path, bytes = clip.len(), looped, "play");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_assets(name: &str) -> (AssetRoot, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!("swarm-audio-{name}-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("Resources")).unwrap();
        (AssetRoot::new(&dir), dir)
    }

    #[test]
    fn missing_sound_is_a_typed_error() {
        let mut audio = AudioSystem::silent(AssetRoot::new("nowhere"));
        let err = audio.load("Resources/explosion.wav").unwrap_err();
        assert!(matches!(err, HostError::SoundLoad { ref path, .. } if path == "Resources/explosion.wav"));
        // Playing it anyway only logs.
        audio.play("Resources/explosion.wav");
        assert!(!audio.is_loaded("Resources/explosion.wav"));
    }

    #[test]
    fn loads_once_and_plays_lazily() {
        let (assets, dir) = temp_assets("lazy");
        std::fs::write(dir.join("Resources/beep.wav"), b"RIFF....").unwrap();

        let mut audio = AudioSystem::silent(assets);
        assert!(!audio.has_output());
        audio.play("Resources/beep.wav");
        assert!(audio.is_loaded("Resources/beep.wav"));
        audio.load("Resources/beep.wav").unwrap();

        std::fs::remove_dir_all(&dir).ok();
    }
}
