use crate::app::PrakritiApp;
use crate::ui::layout::screen_card;
use egui::{Button, Context};

pub fn ui_welcome(app: &mut PrakritiApp, ctx: &Context) {
    let snapshot = app.engine().map(|engine| {
        (
            engine.bank().title.clone(),
            engine.question_count(),
            engine.answered_count() > 0 && !engine.is_completed(),
            engine.is_completed(),
        )
    });
    let Some((title, question_count, hay_guardado, hay_resultado)) = snapshot else {
        app.cambiar_variante();
        return;
    };

    screen_card(ctx, 230.0, 540.0, |ui| {
        let content_width = ui.available_width();

        ui.heading(&title);
        ui.label(format!("{question_count} preguntas"));
        ui.add_space(18.0);

        let btn_w = (content_width * 0.9).clamp(120.0, 400.0);
        let btn_h = 40.0;

        // Botones
        let btn_cont = if hay_guardado {
            Some(ui.add_sized([btn_w, btn_h], Button::new("▶ Continuar donde lo dejé")))
        } else {
            None
        };
        let btn_result = if hay_resultado {
            Some(ui.add_sized([btn_w, btn_h], Button::new("📊 Ver mi resultado")))
        } else {
            None
        };
        ui.add_space(5.0);
        let start_label = if hay_guardado || hay_resultado {
            "🔄 Empezar de 0"
        } else {
            "▶ Empezar"
        };
        let btn_start = ui.add_sized([btn_w, btn_h], Button::new(start_label));
        ui.add_space(5.0);
        let btn_exit = ui.add_sized([btn_w, btn_h], Button::new("🔙 Volver"));

        if let Some(b) = btn_cont { if b.clicked() { app.continuar_quiz(); } }
        if let Some(b) = btn_result { if b.clicked() { app.ver_resultado(); } }
        if btn_start.clicked() {
            if hay_guardado || hay_resultado {
                app.confirm_reset = true;
            } else {
                app.empezar_desde_cero();
            }
        }
        if btn_exit.clicked() { app.cambiar_variante(); }

        if !app.message.is_empty() {
            ui.add_space(10.0);
            ui.label(&app.message);
        }
    });
}
