use super::*;

impl<S: KeyValueStore> QuizEngine<S> {
    /// Registra la opción `choice` en la pregunta actual. No avanza.
    pub fn answer(&mut self, choice: usize) -> Result<(), QuizError> {
        let index = self.in_progress_index()?;
        let valid = self
            .bank
            .question(index)
            .map(|q| choice < q.options.len())
            .unwrap_or(false);
        if !valid {
            return Err(QuizError::UnknownOption {
                question: index,
                choice,
            });
        }

        if self.answers[index] != Some(choice) {
            debug!("[{}] pregunta {index} -> opción {choice}", self.bank.name);
            self.answers[index] = Some(choice);
        }
        self.persist_progress(index);
        Ok(())
    }

    /// Igual que `answer` pero identificando la opción por su texto
    pub fn answer_by_text(&mut self, text: &str) -> Result<(), QuizError> {
        let index = self.in_progress_index()?;
        let choice = self
            .bank
            .question(index)
            .and_then(|q| q.option_index(text))
            .ok_or_else(|| QuizError::UnknownOptionText {
                question: index,
                text: text.to_string(),
            })?;
        self.answer(choice)
    }

    /// Pasa a la siguiente pregunta; desde la última, completa el cuestionario.
    pub fn advance(&mut self) -> Result<Step, QuizError> {
        let index = self.in_progress_index()?;
        if !self.is_answered(index) {
            return Err(QuizError::Unanswered { index });
        }

        let next = index + 1;
        if next < self.question_count() {
            self.state = QuizState::InProgress { index: next };
            self.persist_progress(next);
            debug!("[{}] avanza a la pregunta {next}", self.bank.name);
            Ok(Step::Moved(next))
        } else {
            self.complete()?;
            Ok(Step::Completed)
        }
    }

    /// Vuelve a la pregunta anterior sin borrar la respuesta de la actual.
    pub fn retreat(&mut self) -> Result<(), QuizError> {
        let index = self.in_progress_index()?;
        if index == 0 {
            return Err(QuizError::AtFirstQuestion);
        }

        let prev = index - 1;
        self.state = QuizState::InProgress { index: prev };
        self.persist_progress(prev);
        debug!("[{}] retrocede a la pregunta {prev}", self.bank.name);
        Ok(())
    }
}
