use super::*;

impl PrakritiApp {
    /// Marca la opción en la pregunta actual y, con avance automático,
    /// programa `siguiente_pregunta` tras la pausa configurada.
    pub fn elegir_opcion(&mut self, choice: usize, now: f64) {
        let delay = self.settings.advance_delay_ms as f64 / 1000.0;
        let auto = self.settings.auto_advance;
        let Some(engine) = self.engine_mut() else {
            return;
        };

        match engine.answer(choice) {
            Ok(()) => {
                self.message.clear();
                if auto {
                    self.pending_advance = Some(now + delay);
                }
            }
            Err(e) => self.message = format!("⚠ {e}"),
        }
    }

    pub fn siguiente_pregunta(&mut self) {
        self.pending_advance = None;
        let Some(engine) = self.engine_mut() else {
            return;
        };

        match engine.advance() {
            Ok(Step::Moved(_)) => self.message.clear(),
            Ok(Step::Completed) => {
                self.state = AppState::Result;
                self.message = "✅ ¡Cuestionario completado!".into();
            }
            Err(e) => self.message = format!("⚠ {e}"),
        }
    }

    pub fn pregunta_anterior(&mut self) {
        self.pending_advance = None;
        let Some(engine) = self.engine_mut() else {
            return;
        };

        match engine.retreat() {
            Ok(()) => self.message.clear(),
            Err(e) => self.message = format!("⚠ {e}"),
        }
    }

    /// Ejecuta el avance automático si ya venció su plazo. Devuelve `true` si avanzó.
    pub fn poll_auto_advance(&mut self, now: f64) -> bool {
        match self.pending_advance {
            Some(deadline) if now >= deadline => {
                self.siguiente_pregunta();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::PrakritiApp;
    use crate::model::{AppState, QuizVariant};

    fn onboarding_app() -> PrakritiApp {
        let mut app = PrakritiApp::new(None).expect("bancos embebidos");
        app.seleccionar_variante(QuizVariant::Onboarding);
        app.continuar_quiz();
        app
    }

    #[test]
    fn auto_advance_waits_for_delay() {
        let mut app = onboarding_app();
        assert_eq!(app.state, AppState::Quiz);

        app.elegir_opcion(0, 10.0);
        assert!(!app.poll_auto_advance(10.1));
        assert_eq!(app.engine().and_then(|e| e.current_index()), Some(0));

        assert!(app.poll_auto_advance(10.5));
        assert_eq!(app.engine().and_then(|e| e.current_index()), Some(1));
        assert_eq!(app.pending_advance, None);
    }

    #[test]
    fn manual_flow_reaches_result() {
        let mut app = onboarding_app();
        app.settings.auto_advance = false;

        app.siguiente_pregunta();
        assert!(app.message.starts_with('⚠'));
        assert_eq!(app.state, AppState::Quiz);

        for choice in [0, 0, 1] {
            app.elegir_opcion(choice, 0.0);
            assert_eq!(app.pending_advance, None);
            app.siguiente_pregunta();
        }
        assert_eq!(app.state, AppState::Result);
        let view = app.result_view().expect("hay resultado");
        assert_eq!(view.headline, "Tu constitución es Vata");
    }

    #[test]
    fn retreat_from_first_question_reports_message() {
        let mut app = onboarding_app();
        app.pregunta_anterior();
        assert!(!app.message.is_empty());
        assert_eq!(app.engine().and_then(|e| e.current_index()), Some(0));
    }
}
