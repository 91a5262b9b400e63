// crates/engine_core/src/session.rs

use std::path::PathBuf;

use engine_shared::{Canvas, GameLogic, InputState};
use tracing::{error, info, warn};

use crate::error::EngineError;
use crate::host::EngineHost;
use crate::replay::InputTape;

/// Where simulation input comes from.
pub enum InputSource {
    Live,
    Replay(InputTape),
}

/// A running game plus everything needed to drive it one tick at a time:
/// the host it talks to, tape recording/replay and in-memory snapshots.
pub struct Session {
    game: Box<dyn GameLogic>,
    host: EngineHost,
    source: InputSource,
    recording: Option<(InputTape, PathBuf)>,
    snapshot: Option<Vec<u8>>,
    tick: u64,
    /// Last user-visible failure, shown by the overlay.
    pub last_error: Option<String>,
}

impl Session {
    pub fn start(
        mut game: Box<dyn GameLogic>,
        mut host: EngineHost,
        source: InputSource,
        record_to: Option<(u32, PathBuf)>,
    ) -> Result<Self, EngineError> {
        game.on_load(&mut host)?;
        info!(title = %game.window().title, "game loaded");

        Ok(Self {
            game,
            host,
            source,
            recording: record_to.map(|(seed, path)| (InputTape::new(seed), path)),
            snapshot: None,
            tick: 0,
            last_error: None,
        })
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn game(&self) -> &dyn GameLogic {
        self.game.as_ref()
    }

    /// True once a replay has fed every recorded tick.
    pub fn replay_finished(&self) -> bool {
        match &self.source {
            InputSource::Replay(tape) => self.tick >= tape.len() as u64,
            InputSource::Live => false,
        }
    }

    /// One fixed simulation step. `live` is ignored while replaying.
    pub fn step(&mut self, live: &InputState, dt: f32) {
        let input = match &self.source {
            InputSource::Live => *live,
            InputSource::Replay(tape) => tape.input_at(self.tick),
        };
        if let Some((tape, _)) = &mut self.recording {
            tape.record(&input);
        }
        self.game.update(&mut self.host, &input, dt);
        self.tick += 1;
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        self.game.render(canvas);
    }

    pub fn save_snapshot(&mut self) {
        match self.game.save_state() {
            Ok(bytes) => {
                info!(tick = self.tick, bytes = bytes.len(), "snapshot stored");
                self.snapshot = Some(bytes);
                self.last_error = None;
            }
            Err(err) => self.report(format!("snapshot failed: {err}")),
        }
    }

    pub fn restore_snapshot(&mut self) {
        let Some(bytes) = &self.snapshot else {
            warn!("no snapshot to restore");
            return;
        };
        if self.recording.is_some() || matches!(self.source, InputSource::Replay(_)) {
            warn!("restoring a snapshot desynchronises the input tape");
        }
        match self.game.load_state(bytes) {
            Ok(()) => self.last_error = None,
            Err(err) => self.report(format!("restore failed: {err}")),
        }
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    fn report(&mut self, message: String) {
        error!("{message}");
        self.last_error = Some(message);
    }

    /// Unloads the game and writes the recorded tape, if any.
    pub fn finish(mut self) -> Result<(), EngineError> {
        self.game.on_unload();
        if let Some((tape, path)) = self.recording.take() {
            tape.save(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::assets::AssetRoot;
    use crate::audio::AudioSystem;
    use crate::input::{ActionRegistry, InputDefaults, InputMap};
    use engine_shared::canonical_actions::MOVE_RIGHT;
    use engine_shared::{
        HostError, HostInterface, Rgb, StateError, WindowSpec, ACTION_NOT_FOUND,
    };

    /// Walks right one pixel per tick while MoveRight is held.
    #[derive(Default)]
    pub(crate) struct Walker {
        pub x: i32,
        right: u32,
        pub unloaded: bool,
    }

    impl GameLogic for Walker {
        fn window(&self) -> WindowSpec {
            WindowSpec {
                width: 8,
                height: 4,
                title: "walker".into(),
            }
        }

        fn on_load(&mut self, host: &mut dyn HostInterface) -> Result<(), HostError> {
            self.right = host.action_id("MoveRight");
            assert_ne!(self.right, ACTION_NOT_FOUND);
            Ok(())
        }

        fn update(&mut self, _host: &mut dyn HostInterface, input: &InputState, _dt: f32) {
            if input.is_active(self.right) { self.x += 1; }
        }

        fn render(&self, canvas: &mut dyn Canvas) {
            canvas.clear();
            canvas.draw(self.x, 0, Rgb::new(255, 255, 255));
        }

        fn on_unload(&mut self) {
            self.unloaded = true;
        }

        fn inspect(&self) -> Vec<(&'static str, String)> {
            vec![("x", self.x.to_string())]
        }

        fn save_state(&self) -> Result<Vec<u8>, StateError> {
            Ok(self.x.to_le_bytes().to_vec())
        }

        fn load_state(&mut self, bytes: &[u8]) -> Result<(), StateError> {
            let raw: [u8; 4] = bytes.try_into().map_err(|_| StateError::BadHeader)?;
            self.x = i32::from_le_bytes(raw);
            Ok(())
        }
    }

    pub(crate) fn test_host() -> EngineHost {
        let mut registry = ActionRegistry::default();
        InputDefaults::setup(&mut registry, &mut InputMap::default());
        let assets = AssetRoot::new("assets");
        EngineHost::new(registry, assets.clone(), AudioSystem::silent(assets))
    }

    fn right() -> InputState {
        let mut input = InputState::default();
        input.set_active(MOVE_RIGHT, true);
        input
    }

    fn walker_x(session: &Session) -> String {
        session.game().inspect()[0].1.clone()
    }

    #[test]
    fn live_steps_feed_the_game() {
        let mut session =
            Session::start(Box::new(Walker::default()), test_host(), InputSource::Live, None).unwrap();
        session.step(&right(), 1.0 / 60.0);
        session.step(&InputState::default(), 1.0 / 60.0);
        assert_eq!(session.tick(), 2);
        assert_eq!(walker_x(&session), "1");
        assert!(!session.replay_finished());
    }

    #[test]
    fn replay_ignores_live_input() {
        let mut tape = InputTape::new(0);
        tape.record(&right());
        tape.record(&right());

        let mut session = Session::start(
            Box::new(Walker::default()),
            test_host(),
            InputSource::Replay(tape),
            None,
        )
        .unwrap();
        for _ in 0..3 {
            session.step(&InputState::default(), 1.0 / 60.0);
        }
        assert_eq!(walker_x(&session), "2");
        assert!(session.replay_finished());
    }

    #[test]
    fn snapshot_round_trip_through_the_session() {
        let mut session =
            Session::start(Box::new(Walker::default()), test_host(), InputSource::Live, None).unwrap();
        session.restore_snapshot();
        assert!(!session.has_snapshot());

        session.step(&right(), 1.0 / 60.0);
        session.save_snapshot();
        session.step(&right(), 1.0 / 60.0);
        session.restore_snapshot();
        assert_eq!(walker_x(&session), "1");
        assert!(session.last_error.is_none());
    }

    #[test]
    fn recording_is_written_on_finish() {
        let path = std::env::temp_dir().join(format!("swarm-session-{}.tape", std::process::id()));
        let mut session = Session::start(
            Box::new(Walker::default()),
            test_host(),
            InputSource::Live,
            Some((42, path.clone())),
        )
        .unwrap();
        session.step(&right(), 1.0 / 60.0);
        session.finish().unwrap();

        let tape = InputTape::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(tape.seed, 42);
        assert_eq!(tape.len(), 1);
        assert!(tape.input_at(0).is_active(MOVE_RIGHT));
    }
}
