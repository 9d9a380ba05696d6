use super::*;

impl PrakritiApp {
    /// Reinicia la variante actual (borra progreso y resultado) y entra al cuestionario
    pub fn empezar_desde_cero(&mut self) {
        if let Some(engine) = self.engine_mut() {
            engine.restart();
        }
        self.pending_advance = None;
        self.confirm_reset = false;
        self.state = AppState::Quiz;
        self.message.clear();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres borrar tus respuestas y tu resultado? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.empezar_desde_cero();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
