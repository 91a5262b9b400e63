// crates/engine_core/src/replay.rs

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use engine_shared::{FrameInputState, InputState};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EngineError;

/// Per-tick inputs of one run, enough to replay it exactly when paired with
/// the same seed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTape {
    pub seed: u32,
    pub frames: Vec<FrameInputState>,
}

impl InputTape {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            frames: Vec::new(),
        }
    }

    pub fn record(&mut self, state: &InputState) {
        let tick = self.frames.len() as u64;
        self.frames.push(FrameInputState::from_state(tick, state));
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Input for `tick`; an idle state once the tape runs out.
    pub fn input_at(&self, tick: u64) -> InputState {
        self.frames
            .get(tick as usize)
            .map(FrameInputState::to_state)
            .unwrap_or_default()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EngineError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| tape_io(path, source))?;
        bincode::serialize_into(BufWriter::new(file), self)?;
        info!(path = %path.display(), frames = self.frames.len(), "input tape saved");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| tape_io(path, source))?;
        let tape: InputTape = bincode::deserialize_from(BufReader::new(file))?;
        info!(path = %path.display(), frames = tape.frames.len(), seed = tape.seed, "input tape loaded");
        Ok(tape)
    }
}

fn tape_io(path: &Path, source: std::io::Error) -> EngineError {
    EngineError::TapeIo {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_shared::canonical_actions::{MOVE_LEFT, MOVE_UP};

    #[test]
    fn records_ticks_in_order_and_idles_past_the_end() {
        let mut tape = InputTape::new(7);
        let mut input = InputState::default();
        input.set_active(MOVE_UP, true);
        tape.record(&InputState::default());
        tape.record(&input);

        assert_eq!(tape.frames[1].tick, 1);
        assert!(tape.input_at(1).is_active(MOVE_UP));
        assert_eq!(tape.input_at(5), InputState::default());
    }

    #[test]
    fn survives_a_trip_through_disk() {
        let path = std::env::temp_dir().join(format!("swarm-tape-{}.bin", std::process::id()));
        let mut tape = InputTape::new(1_234_567);
        let mut input = InputState::default();
        input.set_active(MOVE_LEFT, true);
        for _ in 0..3 {
            tape.record(&input);
        }

        tape.save(&path).unwrap();
        let loaded = InputTape::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, tape);
    }

    #[test]
    fn missing_or_garbage_tapes_are_errors() {
        assert!(matches!(
            InputTape::load("no/such/tape.bin"),
            Err(EngineError::TapeIo { .. })
        ));

        let path = std::env::temp_dir().join(format!("swarm-bad-tape-{}.bin", std::process::id()));
        std::fs::write(&path, [1u8, 2, 3]).unwrap();
        let result = InputTape::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(EngineError::TapeFormat(_))));
    }
}
