use serde::{Deserialize, Serialize};

/// Los tres doshas. El orden de declaración es también la prioridad de desempate.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn index(self) -> usize {
        match self {
            Dosha::Vata => 0,
            Dosha::Pitta => 1,
            Dosha::Kapha => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum QuizVariant {
    Full,
    Onboarding,
}

impl QuizVariant {
    pub const ALL: [QuizVariant; 2] = [QuizVariant::Full, QuizVariant::Onboarding];
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DoshaOption {
    pub text: String, // Solo para mostrar; la identidad es el índice
    pub dosha: Dosha,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub category: String,
    pub options: Vec<DoshaOption>,
}

impl Question {
    /// Índice de la opción cuyo texto coincide exactamente
    pub fn option_index(&self, text: &str) -> Option<usize> {
        self.options.iter().position(|o| o.text == text)
    }
}

/// Umbrales de clasificación, en puntos porcentuales.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    #[serde(default = "default_tridoshic_spread")]
    pub tridoshic_spread: u8,
    #[serde(default = "default_dual_gap")]
    pub dual_gap: u8,
}

fn default_tridoshic_spread() -> u8 {
    15
}

fn default_dual_gap() -> u8 {
    10
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            tridoshic_spread: default_tridoshic_spread(),
            dual_gap: default_dual_gap(),
        }
    }
}

/// Banco de preguntas inmutable que recibe el motor al construirse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thresholds: Thresholds,
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    VariantSelect,
    Welcome,
    Quiz,
    Result,
}

#[cfg(test)]
impl QuestionBank {
    /// Banco sintético de `n` preguntas con opciones [vata, pitta, kapha]
    pub(crate) fn synthetic(n: u32) -> Self {
        QuestionBank {
            name: "test".into(),
            title: String::new(),
            thresholds: Thresholds::default(),
            questions: (1..=n)
                .map(|id| Question {
                    id,
                    text: format!("Pregunta {id}"),
                    category: String::new(),
                    options: Dosha::ALL
                        .iter()
                        .map(|d| DoshaOption {
                            text: d.label().to_string(),
                            dosha: *d,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
