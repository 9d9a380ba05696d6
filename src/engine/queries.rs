use super::*;

impl<S: KeyValueStore> QuizEngine<S> {
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, QuizState::Completed(_))
    }

    /// Resultado final; `None` hasta que se complete el cuestionario
    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            QuizState::Completed(result) => Some(result),
            QuizState::InProgress { .. } => None,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { index } => Some(index),
            QuizState::Completed(_) => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.bank.question(i))
    }

    /// Índice de la opción elegida en la pregunta actual
    pub fn current_answer(&self) -> Option<usize> {
        self.current_index()
            .and_then(|i| self.answers.get(i).copied().flatten())
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    pub fn is_answered(&self, index: usize) -> bool {
        matches!(self.answers.get(index), Some(Some(_)))
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Fracción respondida en [0, 1]; 1 una vez completado
    pub fn progress_fraction(&self) -> f32 {
        if self.is_completed() {
            return 1.0;
        }
        let total = self.question_count();
        if total == 0 {
            return 0.0;
        }
        self.answered_count() as f32 / total as f32
    }

    pub fn running_tally(&self) -> DoshaTally {
        DoshaTally::from_answers(&self.bank, &self.answers)
    }

    /// Distribución provisional con las respuestas dadas hasta ahora
    pub fn running_percentages(&self) -> Option<DoshaPercentages> {
        DoshaPercentages::from_tally(&self.running_tally())
    }
}
