use egui::{Context, RichText};
use crate::app::PrakritiApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::screen_card;

pub fn ui_variant_select(app: &mut PrakritiApp, ctx: &Context) {
    screen_card(ctx, 300.0, 540.0, |ui| {
        let content_width = ui.available_width();

        ui.heading("🌿 ¡Bienvenido al test de Prakriti!");
        ui.add_space(18.0);
        ui.label("Elige qué test quieres hacer");
        ui.add_space(18.0);

        let button_width = (content_width - 40.0).clamp(160.0, 420.0);

        // Botones de variante
        for info in app.variant_infos() {
            if big_list_button(ui, info.label(), button_width, 40.0, true) {
                app.seleccionar_variante(info.variant);
            }
            ui.add_space(5.0);
        }

        #[cfg(not(target_arch = "wasm32"))]
        if big_list_button(ui, "Salir".to_string(), button_width, 40.0, true) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Mensaje de error / info
        if !app.message.is_empty() {
            ui.add_space(10.0);
            ui.label(
                RichText::new(&app.message)
                    .color(egui::Color32::YELLOW)
                    .strong(),
            );
        }
    });
}
