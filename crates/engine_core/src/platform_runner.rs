// crates/engine_core/src/platform_runner.rs

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Arc;

use tracing::{error, info, warn};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use engine_shared::canonical_actions::{LOAD_SNAPSHOT, QUIT, SAVE_SNAPSHOT, TOGGLE_INSPECTOR};
use engine_shared::InputState;

use crate::app::App;
use crate::assets::AssetRoot;
use crate::audio::AudioSystem;
use crate::canvas::PixelCanvas;
use crate::engine_loop::{EngineLoop, SIM_DT};
use crate::error::EngineError;
use crate::gui::GuiSystem;
use crate::input::poller::InputPoller;
use crate::inspector;
use crate::renderer::{GuiFrame, Renderer};
use crate::session::Session;

/// Simple, best-effort file logger for fatal errors.
fn log_fatal_error_to_file(message: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open("engine_fatal.log")
    {
        let _ = writeln!(file, "{}", message);
    }
}

/// Owns App and runs the platform (winit) event loop.
/// This isolates OS interaction from the engine core.
pub struct PlatformRunner {
    app: App,
}

impl PlatformRunner {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn start(self) -> Result<(), EngineError> {
        let spec = self.app.game.window();
        let event_loop = EventLoop::new()?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(&spec.title)
                .with_inner_size(winit::dpi::LogicalSize::new(spec.width, spec.height))
                .build(&event_loop)?,
        );

        // GUI + renderer initialization
        let mut gui = GuiSystem::new(&window);
        let mut renderer =
            pollster::block_on(Renderer::new(window.clone(), spec.width, spec.height))?;

        // Game initialization
        let assets = AssetRoot::new(&self.app.options.asset_root);
        let audio = AudioSystem::new(assets.clone());
        let (mut session, (registry, input_map)) = self.app.into_session(assets, audio)?;
        let mut canvas = PixelCanvas::new(spec.width, spec.height);

        // Engine loop + input poller
        let mut engine_loop = EngineLoop::new(SIM_DT);
        let mut input_poller = InputPoller::new();
        let mut last_input_state = InputState::default();

        info!(width = spec.width, height = spec.height, "entering event loop");

        event_loop.run(|event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            // Give GUI first shot at all window events (for focus, etc.).
            if let Event::WindowEvent { event: ref w_event, .. } = event {
                gui.handle_event(&window, w_event);
            }

            match event {
                Event::WindowEvent { event: win_event, .. } => match win_event {
                    WindowEvent::CloseRequested => elwt.exit(),

                    // Low-level input: delegate to InputPoller unless GUI owns keyboard.
                    WindowEvent::KeyboardInput { .. } => {
                        if !gui.wants_keyboard_input() {
                            input_poller.handle_event(&win_event);
                        }
                    }
                    WindowEvent::Focused(false) => input_poller.handle_event(&win_event),

                    WindowEvent::Resized(size) => renderer.resize(size),

                    WindowEvent::RedrawRequested => {
                        // --- RENDER PHASE ---
                        session.render(&mut canvas);

                        let mut inspector_open = gui.show_inspector;
                        let (primitives, textures_delta) = gui.draw(&window, |ctx| {
                            inspector::show(
                                ctx,
                                &session,
                                &registry,
                                &last_input_state,
                                &mut inspector_open,
                            );
                        });
                        gui.show_inspector = inspector_open;

                        let overlay = GuiFrame {
                            ctx: &gui.ctx,
                            primitives: &primitives,
                            textures_delta: &textures_delta,
                        };
                        match renderer.render(&canvas, Some(overlay)) {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                                warn!("surface lost or outdated, reconfiguring swapchain");
                                renderer.resize(window.inner_size());
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                let msg = "FATAL: out of GPU memory, exiting";
                                error!("{msg}");
                                log_fatal_error_to_file(msg);
                                elwt.exit();
                            }
                            Err(wgpu::SurfaceError::Timeout) => {
                                warn!("surface timeout, skipping this frame");
                            }
                        }
                    }

                    _ => {}
                },

                Event::AboutToWait => {
                    // --- UPDATE PHASE ---

                    // 1) Time step
                    let frame_dt = engine_loop.tick_timer();

                    // 2) Input resolution: held keys -> InputState
                    let input_state = input_poller.resolve(&input_map);

                    // 3) Engine actions, edge-triggered.
                    if handle_engine_actions(&input_state, &last_input_state, &mut session, &mut gui) {
                        elwt.exit();
                        return;
                    }

                    // 4) Fixed-step simulation.
                    engine_loop.update_simulation(frame_dt, |dt| session.step(&input_state, dt));

                    if session.replay_finished() {
                        info!(ticks = session.tick(), "replay finished");
                        elwt.exit();
                    }

                    // 5) Store for next-frame edge detection and request redraw.
                    last_input_state = input_state;
                    window.request_redraw();
                }

                _ => {}
            }
        })?;

        session.finish()
    }
}

/// Inspector toggle, snapshot save/restore. Returns true when the player
/// asked to quit.
fn handle_engine_actions(
    current: &InputState,
    previous: &InputState,
    session: &mut Session,
    gui: &mut GuiSystem,
) -> bool {
    if current.just_pressed(previous, TOGGLE_INSPECTOR) {
        gui.toggle_inspector();
    }
    if current.just_pressed(previous, SAVE_SNAPSHOT) {
        session.save_snapshot();
    }
    if current.just_pressed(previous, LOAD_SNAPSHOT) {
        session.restore_snapshot();
    }
    current.just_pressed(previous, QUIT)
}
