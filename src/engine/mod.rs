use crate::error::QuizError;
use crate::model::{Question, QuestionBank};
use crate::scoring::{self, DoshaPercentages, DoshaTally, QuizResult};
use crate::storage::{KeyValueStore, MemoryStore};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

// Submódulos
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;

pub const PROGRESS_KEY: &str = "quiz-progress";
pub const RESULT_KEY: &str = "quiz-result";

/// Claves que usa un banco en el almacén: progreso y resultado
pub fn storage_keys(bank_name: &str) -> Vec<String> {
    vec![
        format!("{bank_name}/{PROGRESS_KEY}"),
        format!("{bank_name}/{RESULT_KEY}"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    InProgress { index: usize },
    Completed(QuizResult),
}

/// Qué ocurrió tras un `advance()` válido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(usize),
    Completed,
}

/// Progreso a medias que se guarda tras cada respuesta y cada movimiento.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuizProgress {
    pub bank: String,
    pub current_question_index: usize,
    pub answers: Vec<Option<usize>>, // índice de la opción elegida por pregunta
}

pub struct QuizEngine<S: KeyValueStore = MemoryStore> {
    bank: QuestionBank,
    answers: Vec<Option<usize>>,
    state: QuizState,
    store: S,
    progress_key: String,
    result_key: String,
}

impl<S: KeyValueStore> QuizEngine<S> {
    /// Construye el motor y retoma lo que hubiera guardado en `store`:
    /// primero un progreso válido, si no un resultado, si no empieza de cero.
    pub fn open(bank: QuestionBank, store: S) -> Self {
        let progress_key = format!("{}/{PROGRESS_KEY}", bank.name);
        let result_key = format!("{}/{RESULT_KEY}", bank.name);

        let mut engine = Self {
            answers: vec![None; bank.len()],
            bank,
            state: QuizState::InProgress { index: 0 },
            store,
            progress_key,
            result_key,
        };

        if let Some(progress) = engine.load_progress() {
            debug!(
                "[{}] retomando en la pregunta {}",
                engine.bank.name, progress.current_question_index
            );
            engine.answers = progress.answers;
            engine.state = QuizState::InProgress {
                index: progress.current_question_index,
            };
        } else if let Some(result) = engine.load_result() {
            debug!("[{}] resultado previo encontrado", engine.bank.name);
            engine.state = QuizState::Completed(result);
        }

        engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn storage_keys(&self) -> Vec<String> {
        vec![self.progress_key.clone(), self.result_key.clone()]
    }

    // Índice actual, o error si ya está completado
    fn in_progress_index(&self) -> Result<usize, QuizError> {
        match self.state {
            QuizState::InProgress { index } => Ok(index),
            QuizState::Completed(_) => Err(QuizError::AlreadyCompleted),
        }
    }
}
