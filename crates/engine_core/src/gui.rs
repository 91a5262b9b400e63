// crates/engine_core/src/gui.rs
use egui::Context;
use winit::{event::WindowEvent, window::Window};

pub struct GuiSystem {
    pub ctx: Context,
    state: egui_winit::State,
    pub show_inspector: bool,
}

impl GuiSystem {
    /// The integration needs the window, so this runs after window creation.
    pub fn new(window: &Window) -> Self {
        let ctx = Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
        );
        Self {
            ctx,
            state,
            show_inspector: false,
        }
    }

    /// Forward window events to egui
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) {
        let _ = self.state.on_window_event(window, event);
    }

    pub fn wants_keyboard_input(&self) -> bool {
        self.ctx.wants_keyboard_input()
    }

    pub fn toggle_inspector(&mut self) {
        self.show_inspector = !self.show_inspector;
    }

    /// Prepare the frame, run the UI closure, and output draw data
    pub fn draw(
        &mut self,
        window: &Window,
        run_ui: impl FnOnce(&Context),
    ) -> (Vec<egui::ClippedPrimitive>, egui::TexturesDelta) {
        let raw_input = self.state.take_egui_input(window);
        self.ctx.begin_frame(raw_input);

        run_ui(&self.ctx);

        let output = self.ctx.end_frame();
        self.state.handle_platform_output(window, output.platform_output);

        let primitives = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        (primitives, output.textures_delta)
    }
}
