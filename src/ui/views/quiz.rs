use crate::app::PrakritiApp;
use crate::model::AppState;
use crate::ui::helpers::{dosha_bar, option_button};
use crate::ui::layout::{screen_card, button_pair};
use egui::{Context, ProgressBar, RichText};

pub fn ui_quiz(app: &mut PrakritiApp, ctx: &Context) {
    // Sin motor o ya completado: no hay pregunta que mostrar
    let snapshot = app.engine().and_then(|engine| {
        let index = engine.current_index()?;
        let question = engine.current_question()?.clone();
        Some((
            index,
            question,
            engine.question_count(),
            engine.progress_fraction(),
            engine.current_answer(),
        ))
    });
    let Some((index, question, total, fraction, selected)) = snapshot else {
        if app.engine().is_some() {
            app.state = AppState::Result;
        } else {
            app.cambiar_variante();
        }
        return;
    };
    let running = app.running_bars();
    let now = ctx.input(|i| i.time);

    screen_card(ctx, 480.0, 650.0, |ui| {
        let panel_width = ui.available_width();

        ui.add(
            ProgressBar::new(fraction)
                .desired_width(panel_width)
                .show_percentage(),
        );
        ui.add_space(10.0);

        if !question.category.is_empty() {
            ui.label(RichText::new(&question.category).weak());
        }
        ui.heading(format!("Pregunta {} de {}", index + 1, total));
        ui.add_space(6.0);
        ui.label(RichText::new(&question.text).size(18.0));
        ui.add_space(12.0);

        for (choice, opt) in question.options.iter().enumerate() {
            if option_button(ui, &opt.text, panel_width, selected == Some(choice)) {
                app.elegir_opcion(choice, now);
            }
            ui.add_space(4.0);
        }

        ui.add_space(8.0);
        let next_label = if index + 1 == total { "Ver resultado ✅" } else { "Siguiente ▶" };
        let (anterior, siguiente) = button_pair(ui, panel_width, ["◀ Anterior", next_label]);
        if anterior {
            app.pregunta_anterior();
        }
        if siguiente {
            app.siguiente_pregunta();
        }

        // Distribución provisional
        if !running.is_empty() {
            ui.add_space(12.0);
            ui.label("Tendencia hasta ahora");
            for bar in &running {
                dosha_bar(ui, bar, panel_width);
            }
        }

        ui.add_space(8.0);
        if !app.message.is_empty() {
            ui.label(&app.message);
        }
    });
}
