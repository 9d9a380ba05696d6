use super::*;

impl<S: KeyValueStore> QuizEngine<S> {
    /// Borra respuestas, progreso y resultado guardados, y vuelve a la primera pregunta
    pub fn restart(&mut self) {
        self.answers = vec![None; self.bank.len()];
        self.clear_progress();
        self.clear_result();
        self.state = QuizState::InProgress { index: 0 };
        info!("[{}] cuestionario reiniciado", self.bank.name);
    }
}
