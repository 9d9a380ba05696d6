use super::*;

impl PrakritiApp {
    pub fn cambiar_variante(&mut self) {
        self.pending_advance = None;
        self.state = AppState::VariantSelect;
    }

    /// Entrypoint al elegir variante en el menú inicial
    pub fn seleccionar_variante(&mut self, variant: QuizVariant) {
        self.selected_variant = Some(variant);
        self.settings.last_variant = Some(variant);
        self.pending_advance = None;
        self.state = AppState::Welcome;
        self.message.clear();
    }

    /// Continuar donde se dejó: al cuestionario o, si ya terminó, al resultado
    pub fn continuar_quiz(&mut self) {
        let Some(engine) = self.engine() else {
            self.state = AppState::VariantSelect;
            return;
        };
        self.state = if engine.is_completed() {
            AppState::Result
        } else {
            AppState::Quiz
        };
        self.message.clear();
    }

    pub fn ver_resultado(&mut self) {
        if self.engine().and_then(|e| e.result()).is_some() {
            self.state = AppState::Result;
            self.message.clear();
        }
    }

    pub fn volver_al_menu_principal(&mut self) {
        self.pending_advance = None;
        self.state = AppState::Welcome;
        self.message.clear();
    }
}
