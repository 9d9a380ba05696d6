use crate::app::PrakritiApp;
use crate::model::AppState;
use crate::ui::helpers::dosha_bar;
use crate::ui::layout::{screen_card, button_pair};
use egui::{Context, RichText};

pub fn ui_result(app: &mut PrakritiApp, ctx: &Context) {
    // Si no hay resultado, volvemos al menú para no dibujar una pantalla vacía
    let Some(view) = app.result_view() else {
        app.state = AppState::Welcome;
        return;
    };

    screen_card(ctx, 360.0, 600.0, |ui| {
        let panel_width = ui.available_width();

        ui.heading(RichText::new(&view.headline).strong());
        ui.add_space(14.0);

        for bar in &view.bars {
            dosha_bar(ui, bar, panel_width);
            ui.add_space(4.0);
        }

        ui.add_space(14.0);
        let (volver, repetir) = button_pair(ui, panel_width, ["Volver", "Repetir test"]);
        if volver {
            app.volver_al_menu_principal();
        }
        if repetir {
            app.confirm_reset = true;
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
