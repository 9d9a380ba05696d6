// src/view_models.rs

use crate::model::{Dosha, QuizVariant};
use crate::scoring::{Constitution, QuizResult};

#[derive(Clone, Debug)]
pub struct VariantInfo {
    pub variant: QuizVariant,
    pub title: String,
    pub question_count: usize,
    pub answered: usize,   // respuestas del progreso en curso
    pub completed: bool,   // el motor está en estado completado (un progreso a medias tiene prioridad)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoshaBar {
    pub dosha: Dosha,
    pub percent: u8,
    pub highlighted: bool, // forma parte de la constitución
}

#[derive(Clone, Debug)]
pub struct ResultView {
    pub headline: String,
    pub bars: Vec<DoshaBar>,
}

impl VariantInfo {
    pub fn label(&self) -> String {
        if self.completed {
            format!("{} ✅", self.title)
        } else if self.answered > 0 {
            format!(
                "{} ▶ ({}/{} respondidas)",
                self.title, self.answered, self.question_count
            )
        } else {
            format!("{} ({} preguntas)", self.title, self.question_count)
        }
    }
}

impl DoshaBar {
    pub fn label(&self) -> String {
        format!("{} {}%", self.dosha.label(), self.percent)
    }

    pub fn fraction(&self) -> f32 {
        f32::from(self.percent) / 100.0
    }
}

impl ResultView {
    pub fn from_result(result: &QuizResult) -> Self {
        let in_constitution = |d: Dosha| match result.constitution {
            Constitution::Single(a) => a == d,
            Constitution::Dual(a, b) => a == d || b == d,
            Constitution::Tridoshic => true,
        };

        // Barras de mayor a menor
        let bars = result
            .percentages
            .ranked()
            .iter()
            .map(|&(dosha, percent)| DoshaBar {
                dosha,
                percent,
                highlighted: in_constitution(dosha),
            })
            .collect();

        let headline = match result.constitution {
            Constitution::Single(d) => format!("Tu constitución es {}", d.label()),
            Constitution::Dual(a, b) => {
                format!("Tu constitución es dual: {}-{}", a.label(), b.label())
            }
            Constitution::Tridoshic => "Tu constitución es tridóshica".to_string(),
        };

        Self { headline, bars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::DoshaPercentages;

    #[test]
    fn result_view_orders_and_highlights() {
        let result = QuizResult {
            percentages: DoshaPercentages::new(20, 35, 45),
            constitution: Constitution::Dual(Dosha::Kapha, Dosha::Pitta),
        };
        let view = ResultView::from_result(&result);
        assert_eq!(view.headline, "Tu constitución es dual: Kapha-Pitta");
        assert_eq!(
            view.bars.iter().map(|b| b.dosha).collect::<Vec<_>>(),
            vec![Dosha::Kapha, Dosha::Pitta, Dosha::Vata]
        );
        assert!(view.bars[0].highlighted && view.bars[1].highlighted);
        assert!(!view.bars[2].highlighted);
        assert_eq!(view.bars[0].label(), "Kapha 45%");
    }

    #[test]
    fn variant_label_reflects_progress() {
        let mut info = VariantInfo {
            variant: QuizVariant::Full,
            title: "Test".into(),
            question_count: 20,
            answered: 0,
            completed: false,
        };
        assert_eq!(info.label(), "Test (20 preguntas)");
        info.answered = 5;
        assert_eq!(info.label(), "Test ▶ (5/20 respondidas)");
        info.completed = true;
        assert_eq!(info.label(), "Test ✅");
    }
}
