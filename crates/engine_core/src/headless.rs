// crates/engine_core/src/headless.rs

use engine_shared::InputState;
use tracing::info;

use crate::canvas::PixelCanvas;
use crate::engine_loop::SIM_DT;
use crate::error::EngineError;
use crate::session::Session;

/// Result of a windowless run.
pub struct HeadlessReport {
    pub ticks: u64,
    /// Inspector rows after the last tick.
    pub summary: Vec<(&'static str, String)>,
    /// Final frame, rendered once at the end.
    pub frame: PixelCanvas,
}

/// Steps a session as fast as possible, one tick per iteration, with no
/// window and no frame pacing.
pub struct HeadlessRunner {
    session: Session,
}

impl HeadlessRunner {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Runs `ticks` ticks, or until a replay runs out when `ticks` is `None`.
    pub fn run(mut self, ticks: Option<u64>) -> Result<HeadlessReport, EngineError> {
        let idle = InputState::default();
        loop {
            let done = match ticks {
                Some(limit) => self.session.tick() >= limit,
                None => self.session.replay_finished(),
            };
            if done {
                break;
            }
            self.session.step(&idle, SIM_DT);
        }

        let window = self.session.game().window();
        let mut frame = PixelCanvas::new(window.width, window.height);
        self.session.render(&mut frame);

        let report = HeadlessReport {
            ticks: self.session.tick(),
            summary: self.session.game().inspect(),
            frame,
        };
        info!(ticks = report.ticks, "headless run finished");

        self.session.finish()?;
        Ok(report)
    }
}
