// crates/engine_core/src/app.rs

use std::path::PathBuf;

use engine_shared::GameLogic;

use crate::assets::AssetRoot;
use crate::audio::AudioSystem;
use crate::error::EngineError;
use crate::headless::{HeadlessReport, HeadlessRunner};
use crate::host::EngineHost;
use crate::input::{ActionRegistry, InputDefaults, InputMap};
use crate::platform_runner::PlatformRunner;
use crate::replay::InputTape;
use crate::session::{InputSource, Session};

/// How a run is fed and what it leaves behind.
#[derive(Default)]
pub struct RunOptions {
    /// Directory game asset paths are resolved against.
    pub asset_root: PathBuf,
    /// Drive the game from this tape instead of the keyboard.
    pub replay: Option<InputTape>,
    /// Record every tick's input, tagged with the run's seed, to this file.
    pub record: Option<(u32, PathBuf)>,
}

/// Engine entry point: one game plus the input setup and run options.
pub struct App {
    pub(crate) registry: ActionRegistry,
    pub(crate) input_map: InputMap,
    pub(crate) game: Box<dyn GameLogic>,
    pub(crate) options: RunOptions,
}

impl App {
    pub fn new(game: Box<dyn GameLogic>, options: RunOptions) -> Self {
        let mut registry = ActionRegistry::default();
        let mut input_map = InputMap::default();
        InputDefaults::setup(&mut registry, &mut input_map);

        Self {
            registry,
            input_map,
            game,
            options,
        }
    }

    /// Opens a window and runs until the player quits.
    pub fn run(self) -> Result<(), EngineError> {
        PlatformRunner::new(self).start()
    }

    /// Runs without a window or audio device. With `ticks` unset the run
    /// lasts as long as the replay tape.
    pub fn run_headless(self, ticks: Option<u64>) -> Result<HeadlessReport, EngineError> {
        let assets = AssetRoot::new(&self.options.asset_root);
        let audio = AudioSystem::silent(assets.clone());
        let (session, _) = self.into_session(assets, audio)?;
        HeadlessRunner::new(session).run(ticks)
    }

    /// Loads the game. Returns the key map for the caller's input poller.
    pub(crate) fn into_session(
        self,
        assets: AssetRoot,
        audio: AudioSystem,
    ) -> Result<(Session, (ActionRegistry, InputMap)), EngineError> {
        let host = EngineHost::new(self.registry.clone(), assets, audio);
        let source = match self.options.replay {
            Some(tape) => InputSource::Replay(tape),
            None => InputSource::Live,
        };
        let session = Session::start(self.game, host, source, self.options.record)?;
        Ok((session, (self.registry, self.input_map)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::Walker;
    use engine_shared::canonical_actions::MOVE_RIGHT;
    use engine_shared::InputState;

    #[test]
    fn headless_replay_through_the_app() {
        let mut tape = InputTape::new(3);
        let mut right = InputState::default();
        right.set_active(MOVE_RIGHT, true);
        for _ in 0..4 {
            tape.record(&right);
        }

        let options = RunOptions {
            replay: Some(tape),
            ..RunOptions::default()
        };
        let report = App::new(Box::new(Walker::default()), options).run_headless(None).unwrap();
        assert_eq!(report.ticks, 4);
        assert_eq!(report.summary, vec![("x", "4".to_string())]);
    }
}
