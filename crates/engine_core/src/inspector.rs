// crates/engine_core/src/inspector.rs
use egui::{Color32, Context};
use engine_shared::InputState;

use crate::input::ActionRegistry;
use crate::session::Session;

pub fn show(
    ctx: &Context,
    session: &Session,
    registry: &ActionRegistry,
    input: &InputState,
    open: &mut bool,
) {
    egui::Window::new("Inspector")
        .open(open)
        .default_pos([10.0, 10.0])
        .show(ctx, |ui| {
            ui.heading(session.game().window().title);
            ui.label(format!("tick {}", session.tick()));
            ui.separator();

            egui::Grid::new("game_rows").striped(true).show(ui, |ui| {
                for (key, value) in session.game().inspect() {
                    ui.label(key);
                    ui.monospace(value);
                    ui.end_row();
                }
            });

            ui.separator();
            ui.collapsing("Held actions", |ui| {
                let mut any = false;
                for id in 0..registry.len() as u32 {
                    if input.is_active(id) {
                        any = true;
                        ui.colored_label(Color32::GREEN, registry.name(id).unwrap_or("?"));
                    }
                }
                if !any {
                    ui.colored_label(Color32::from_gray(100), "(none)");
                }
            });

            ui.separator();
            let snapshot = if session.has_snapshot() { "stored" } else { "empty" };
            ui.label(format!("Snapshot: {snapshot}  (F5 save, F9 restore)"));
        });

    if let Some(message) = &session.last_error {
        egui::Window::new("Error")
            .default_pos([400.0, 100.0])
            .show(ctx, |ui| {
                ui.colored_label(Color32::RED, message);
            });
    }
}
