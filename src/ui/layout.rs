
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};
use crate::app::PrakritiApp;

pub fn top_panel(app: &mut PrakritiApp, ctx: &Context, borrar: bool) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if borrar {
                if ui.button("🔄 Borrar respuestas y reiniciar").clicked() {
                    app.confirm_reset = true;
                }
            }

            if ui.button("Cambiar test").clicked() {
                app.cambiar_variante();
                ctx.request_repaint();
            }
        });
    });
}

pub fn bottom_panel(app: &mut PrakritiApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.checkbox(&mut app.settings.auto_advance, "Avance automático");

            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    if ui.button("🌙 Modo oscuro").clicked() {
                        ctx.set_visuals(Visuals::dark());
                    }
                    if ui.button("☀Modo claro").clicked() {
                        ctx.set_visuals(Visuals::light());
                    }
                }
            );
        });
    });
}

/// Tarjeta de pantalla: centrada en el panel central, con `max_width` como
/// ancho máximo y `est_height` como altura aproximada del contenido.
pub fn screen_card(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let margin = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(margin);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width().min(max_width));
                    inner(ui);
                });
        });
    });
}

/// Par de botones de igual ancho (volver / seguir). Devuelve qué lado se pulsó.
pub fn button_pair(ui: &mut Ui, width: f32, labels: [&str; 2]) -> (bool, bool) {
    let size = [(width - 8.0) / 2.0, 36.0];
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
        let left = ui.add_sized(size, Button::new(labels[0])).clicked();
        let right = ui.add_sized(size, Button::new(labels[1])).clicked();
        (left, right)
    })
    .inner
}
