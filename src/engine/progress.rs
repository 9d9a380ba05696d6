use super::*;

impl<S: KeyValueStore> QuizEngine<S> {
    /// Lee el progreso guardado. Cualquier cosa ilegible o que no encaje con el
    /// banco actual se descarta y se borra del almacén.
    pub(crate) fn load_progress(&mut self) -> Option<QuizProgress> {
        let raw = self.store.load(&self.progress_key)?;
        let mut progress: QuizProgress = match serde_json::from_str(&raw) {
            Ok(p) => p,
            Err(e) => {
                warn!("[{}] progreso ilegible, se descarta: {e}", self.bank.name);
                self.clear_progress();
                return None;
            }
        };

        let n = self.bank.len();
        if progress.bank != self.bank.name
            || progress.answers.len() != n
            || progress.current_question_index >= n
        {
            warn!(
                "[{}] progreso incompatible (banco '{}', {} respuestas, índice {}), se descarta",
                self.bank.name,
                progress.bank,
                progress.answers.len(),
                progress.current_question_index
            );
            self.clear_progress();
            return None;
        }

        // Opciones que ya no existen en la pregunta: se dejan sin responder
        for (i, (slot, q)) in progress
            .answers
            .iter_mut()
            .zip(&self.bank.questions)
            .enumerate()
        {
            if slot.is_some_and(|c| c >= q.options.len()) {
                warn!("[{}] respuesta inválida en la pregunta {i}, se borra", self.bank.name);
                *slot = None;
            }
        }

        Some(progress)
    }

    pub(crate) fn load_result(&mut self) -> Option<QuizResult> {
        let raw = self.store.load(&self.result_key)?;
        let result: QuizResult = match serde_json::from_str(&raw) {
            Ok(r) => r,
            Err(e) => {
                warn!("[{}] resultado ilegible, se descarta: {e}", self.bank.name);
                self.clear_result();
                return None;
            }
        };

        // Porcentajes que no suman 100 o clasificación que no cuadra con ellos
        if result.percentages.sum() != 100
            || result.constitution != result.percentages.classify(self.bank.thresholds)
        {
            warn!(
                "[{}] resultado incoherente ({:?}), se descarta",
                self.bank.name, result
            );
            self.clear_result();
            return None;
        }

        Some(result)
    }

    pub(crate) fn persist_progress(&mut self, index: usize) {
        let progress = QuizProgress {
            bank: self.bank.name.clone(),
            current_question_index: index,
            answers: self.answers.clone(),
        };
        match serde_json::to_string(&progress) {
            Ok(json) => self.store.save(&self.progress_key, &json),
            Err(e) => warn!("[{}] no se pudo guardar el progreso: {e}", self.bank.name),
        }
    }

    pub(crate) fn persist_result(&mut self, result: &QuizResult) {
        match serde_json::to_string(result) {
            Ok(json) => self.store.save(&self.result_key, &json),
            Err(e) => warn!("[{}] no se pudo guardar el resultado: {e}", self.bank.name),
        }
    }

    pub(crate) fn clear_progress(&mut self) {
        self.store.remove(&self.progress_key);
    }

    pub(crate) fn clear_result(&mut self) {
        self.store.remove(&self.result_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRESS: &str = "test/quiz-progress";
    const RESULT: &str = "test/quiz-result";

    fn open_with(entries: &[(&str, &str)]) -> QuizEngine {
        let mut store = MemoryStore::new();
        for (k, v) in entries {
            store.save(k, v);
        }
        QuizEngine::open(QuestionBank::synthetic(3), store)
    }

    #[test]
    fn progress_is_plain_json() {
        let mut e = open_with(&[]);
        e.answer(2).unwrap();
        e.advance().unwrap();

        let raw = e.store().load(PROGRESS).expect("progreso guardado");
        let progress: QuizProgress = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            progress,
            QuizProgress {
                bank: "test".into(),
                current_question_index: 1,
                answers: vec![Some(2), None, None],
            }
        );
    }

    #[test]
    fn garbage_progress_starts_fresh() {
        let e = open_with(&[(PROGRESS, "{no es json")]);
        assert_eq!(e.state(), &QuizState::InProgress { index: 0 });
        assert_eq!(e.store().load(PROGRESS), None);
    }

    #[test]
    fn index_out_of_range_is_ignored() {
        let e = open_with(&[(
            PROGRESS,
            r#"{"bank":"test","current_question_index":3,"answers":[0,1,2]}"#,
        )]);
        assert_eq!(e.current_index(), Some(0));
        assert_eq!(e.answered_count(), 0);
    }

    #[test]
    fn wrong_length_or_other_bank_is_ignored() {
        let short = open_with(&[(
            PROGRESS,
            r#"{"bank":"test","current_question_index":0,"answers":[0]}"#,
        )]);
        assert_eq!(short.answered_count(), 0);

        let other = open_with(&[(
            PROGRESS,
            r#"{"bank":"otro","current_question_index":1,"answers":[0,1,null]}"#,
        )]);
        assert_eq!(other.current_index(), Some(0));
        assert_eq!(other.answered_count(), 0);
    }

    #[test]
    fn unknown_choice_in_saved_progress_is_cleared() {
        let e = open_with(&[(
            PROGRESS,
            r#"{"bank":"test","current_question_index":2,"answers":[0,9,null]}"#,
        )]);
        assert_eq!(e.current_index(), Some(2));
        assert_eq!(e.answers(), &[Some(0), None, None]);
    }

    #[test]
    fn garbage_result_is_dropped() {
        let e = open_with(&[(RESULT, "[1, 2]")]);
        assert_eq!(e.result(), None);
        assert_eq!(e.store().load(RESULT), None);
    }

    #[test]
    fn inconsistent_result_is_dropped() {
        let bad_sum = open_with(&[(
            RESULT,
            r#"{"percentages":{"vata":250,"pitta":0,"kapha":0},"constitution":{"Dual":["kapha","kapha"]}}"#,
        )]);
        assert_eq!(bad_sum.result(), None);
        assert_eq!(bad_sum.state(), &QuizState::InProgress { index: 0 });
        assert_eq!(bad_sum.store().load(RESULT), None);

        // suma 100, pero 67/33/0 es un Vata dominante, no tridóshico
        let wrong_class = open_with(&[(
            RESULT,
            r#"{"percentages":{"vata":67,"pitta":33,"kapha":0},"constitution":"Tridoshic"}"#,
        )]);
        assert_eq!(wrong_class.result(), None);
        assert_eq!(wrong_class.store().load(RESULT), None);
    }

    #[test]
    fn consistent_result_is_kept() {
        let e = open_with(&[(
            RESULT,
            r#"{"percentages":{"vata":67,"pitta":33,"kapha":0},"constitution":{"Single":"vata"}}"#,
        )]);
        assert_eq!(
            e.result().map(|r| r.percentages),
            Some(DoshaPercentages::new(67, 33, 0))
        );
    }

    #[test]
    fn progress_wins_over_result() {
        let mut done = open_with(&[]);
        for _ in 0..3 {
            done.answer(1).unwrap();
            done.advance().unwrap();
        }
        let result_json = done.store().load(RESULT).expect("resultado guardado");

        let e = open_with(&[
            (RESULT, result_json.as_str()),
            (
                PROGRESS,
                r#"{"bank":"test","current_question_index":1,"answers":[2,null,null]}"#,
            ),
        ]);
        assert_eq!(e.current_index(), Some(1));
        assert_eq!(e.result(), None);
    }
}
