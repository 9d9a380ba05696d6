use super::*;

impl<S: KeyValueStore> QuizEngine<S> {
    /// Puntúa todas las respuestas, guarda el resultado y borra el progreso.
    /// Falla sin cambiar nada si queda alguna pregunta sin responder.
    pub fn complete(&mut self) -> Result<QuizResult, QuizError> {
        self.in_progress_index()?;
        if let Some(index) = self.answers.iter().position(Option::is_none) {
            return Err(QuizError::Unanswered { index });
        }

        let result = scoring::score(&self.bank, &self.answers).ok_or(QuizError::NoAnswers)?;

        self.persist_result(&result);
        self.clear_progress();
        self.state = QuizState::Completed(result);

        let p = result.percentages;
        info!(
            "[{}] completado: vata {}%, pitta {}%, kapha {}% -> {}",
            self.bank.name,
            p.vata,
            p.pitta,
            p.kapha,
            result.constitution.label()
        );
        Ok(result)
    }
}
