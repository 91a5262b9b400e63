// crates/engine_core/src/renderer/mod.rs
pub mod blit_pass;
pub mod context;

use std::sync::Arc;

use winit::dpi::PhysicalSize;
use winit::window::Window;

use self::blit_pass::BlitPass;
use self::context::GraphicsContext;
use crate::canvas::PixelCanvas;
use crate::error::EngineError;

/// Tessellated egui output for one frame.
pub struct GuiFrame<'a> {
    pub ctx: &'a egui::Context,
    pub primitives: &'a [egui::ClippedPrimitive],
    pub textures_delta: &'a egui::TexturesDelta,
}

/// Presents the game's pixel frame with the egui overlay on top.
pub struct Renderer {
    ctx: GraphicsContext,
    blit_pass: BlitPass,
    gui_renderer: egui_wgpu::Renderer,
}

impl Renderer {
    pub async fn new(
        window: Arc<Window>,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<Self, EngineError> {
        let ctx = GraphicsContext::new(window).await?;
        let blit_pass = BlitPass::new(&ctx, frame_width, frame_height);
        let gui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Ok(Self {
            ctx,
            blit_pass,
            gui_renderer,
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    pub fn render(
        &mut self,
        canvas: &PixelCanvas,
        gui: Option<GuiFrame<'_>>,
    ) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        self.blit_pass.draw(&self.ctx, &mut encoder, &view, canvas);
        if let Some(gui) = gui {
            self.paint_gui(&mut encoder, &view, gui);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn paint_gui(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        gui: GuiFrame<'_>,
    ) {
        let device = &self.ctx.device;
        let queue = &self.ctx.queue;

        for (id, delta) in &gui.textures_delta.set {
            self.gui_renderer.update_texture(device, queue, *id, delta);
        }

        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: self.ctx.surface_size(),
            pixels_per_point: gui.ctx.pixels_per_point(),
        };
        self.gui_renderer
            .update_buffers(device, queue, encoder, gui.primitives, &screen);

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        // The blitted frame stays underneath.
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.gui_renderer.render(&mut pass, gui.primitives, &screen);
        }

        for id in &gui.textures_delta.free {
            self.gui_renderer.free_texture(id);
        }
    }
}
