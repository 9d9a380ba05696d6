use crate::model::Dosha;
use thiserror::Error;

/// Fallos de validación del motor. Ninguno altera el estado; se puede reintentar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("la pregunta {index} no tiene respuesta")]
    Unanswered { index: usize },

    #[error("ya estás en la primera pregunta")]
    AtFirstQuestion,

    #[error("el cuestionario ya está completado")]
    AlreadyCompleted,

    #[error("la pregunta {question} no tiene la opción {choice}")]
    UnknownOption { question: usize, choice: usize },

    #[error("la pregunta {question} no tiene la opción \"{text}\"")]
    UnknownOptionText { question: usize, text: String },

    #[error("no hay respuestas que puntuar")]
    NoAnswers,
}

/// Errores de integridad detectados al cargar un banco de preguntas.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("YAML inválido: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("el banco '{0}' no tiene preguntas")]
    Empty(String),

    #[error("la pregunta {index} tiene id 0")]
    ZeroId { index: usize },

    #[error("id de pregunta duplicado: {0}")]
    DuplicateId(u32),

    #[error("la pregunta {id} tiene {count} opciones (se esperan 3)")]
    OptionCount { id: u32, count: usize },

    #[error("la pregunta {id} repite el dosha {dosha:?}")]
    DuplicateDosha { id: u32, dosha: Dosha },

    #[error("la pregunta {id} repite el texto de opción \"{text}\"")]
    DuplicateOptionText { id: u32, text: String },

    #[error("umbral fuera de rango: {0}")]
    Threshold(u8),
}
