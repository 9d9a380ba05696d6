// src/data.rs

use crate::error::BankError;
use crate::model::{QuestionBank, QuizVariant};
use std::collections::HashSet;

impl QuestionBank {
    /// Parsea y valida un banco de preguntas en YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self, BankError> {
        let bank: QuestionBank = serde_yaml::from_str(yaml)?;
        bank.validate()?;
        Ok(bank)
    }

    /// Rechaza los bancos que romperían la puntuación o la identidad de las opciones
    pub fn validate(&self) -> Result<(), BankError> {
        if self.questions.is_empty() {
            return Err(BankError::Empty(self.name.clone()));
        }
        for value in [self.thresholds.tridoshic_spread, self.thresholds.dual_gap] {
            if value > 100 {
                return Err(BankError::Threshold(value));
            }
        }

        let mut ids = HashSet::new();
        for (index, q) in self.questions.iter().enumerate() {
            if q.id == 0 {
                return Err(BankError::ZeroId { index });
            }
            if !ids.insert(q.id) {
                return Err(BankError::DuplicateId(q.id));
            }
            if q.options.len() != 3 {
                return Err(BankError::OptionCount {
                    id: q.id,
                    count: q.options.len(),
                });
            }

            let mut doshas = HashSet::new();
            let mut texts = HashSet::new();
            for opt in &q.options {
                if !doshas.insert(opt.dosha) {
                    return Err(BankError::DuplicateDosha {
                        id: q.id,
                        dosha: opt.dosha,
                    });
                }
                if !texts.insert(opt.text.as_str()) {
                    return Err(BankError::DuplicateOptionText {
                        id: q.id,
                        text: opt.text.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Carga el banco embebido de la variante pedida
pub fn read_bank(variant: QuizVariant) -> Result<QuestionBank, BankError> {
    let file_content = match variant {
        QuizVariant::Full => include_str!("data/prakriti_full.yaml"),
        QuizVariant::Onboarding => include_str!("data/prakriti_onboarding.yaml"),
    };
    QuestionBank::from_yaml_str(file_content)
}
