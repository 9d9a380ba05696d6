use crate::model::{Dosha, QuestionBank, Thresholds};
use serde::{Deserialize, Serialize};

/// Recuento de respuestas por dosha. Siempre se recalcula desde las respuestas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoshaTally {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl DoshaTally {
    pub fn new(vata: u32, pitta: u32, kapha: u32) -> Self {
        Self { vata, pitta, kapha }
    }

    /// Recorre las respuestas y suma un punto al dosha de cada opción elegida.
    /// Los huecos sin respuesta y los índices que no existen en la pregunta se ignoran.
    pub fn from_answers(bank: &QuestionBank, answers: &[Option<usize>]) -> Self {
        let mut tally = Self::default();
        for (question, choice) in bank.questions.iter().zip(answers) {
            if let Some(opt) = choice.and_then(|c| question.options.get(c)) {
                tally.bump(opt.dosha);
            }
        }
        tally
    }

    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    fn bump(&mut self, dosha: Dosha) {
        match dosha {
            Dosha::Vata => self.vata += 1,
            Dosha::Pitta => self.pitta += 1,
            Dosha::Kapha => self.kapha += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    /// Dosha con más respuestas; en empate gana el primero en orden vata > pitta > kapha
    pub fn leader(&self) -> Dosha {
        let mut best = Dosha::Vata;
        for d in Dosha::ALL {
            if self.get(d) > self.get(best) {
                best = d;
            }
        }
        best
    }
}

/// Porcentajes enteros que suman exactamente 100.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoshaPercentages {
    pub vata: u8,
    pub pitta: u8,
    pub kapha: u8,
}

impl DoshaPercentages {
    pub fn new(vata: u8, pitta: u8, kapha: u8) -> Self {
        Self { vata, pitta, kapha }
    }

    /// Redondea cada `count / total * 100` y asigna el residuo al dosha con más
    /// respuestas. Devuelve `None` si no hay ninguna respuesta.
    pub fn from_tally(tally: &DoshaTally) -> Option<Self> {
        let total = i64::from(tally.total());
        if total == 0 {
            return None;
        }

        // Redondeo "half up" en enteros: floor((c * 100 + total / 2) / total)
        let rounded = |count: u32| (i64::from(count) * 200 + total) / (2 * total);
        let mut values = [
            rounded(tally.vata),
            rounded(tally.pitta),
            rounded(tally.kapha),
        ];

        let residual = 100 - values.iter().sum::<i64>();
        if residual != 0 {
            values[tally.leader().index()] += residual;
        }

        let clamp = |v: i64| u8::try_from(v.clamp(0, 100)).unwrap_or(0);
        Some(Self {
            vata: clamp(values[0]),
            pitta: clamp(values[1]),
            kapha: clamp(values[2]),
        })
    }

    pub fn get(&self, dosha: Dosha) -> u8 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn sum(&self) -> u32 {
        u32::from(self.vata) + u32::from(self.pitta) + u32::from(self.kapha)
    }

    /// Doshas ordenados de mayor a menor porcentaje (empates en orden de enumeración)
    pub fn ranked(&self) -> [(Dosha, u8); 3] {
        let mut ranked = Dosha::ALL.map(|d| (d, self.get(d)));
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Tridóshico primero, después dual y por último un dosha dominante.
    pub fn classify(&self, thresholds: Thresholds) -> Constitution {
        let [(d0, p0), (d1, p1), (_, p2)] = self.ranked();
        if p0 - p2 <= thresholds.tridoshic_spread {
            Constitution::Tridoshic
        } else if p0 - p1 <= thresholds.dual_gap {
            Constitution::Dual(d0, d1)
        } else {
            Constitution::Single(d0)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constitution {
    Single(Dosha),
    Dual(Dosha, Dosha),
    Tridoshic,
}

impl Constitution {
    pub fn label(&self) -> String {
        match self {
            Constitution::Single(d) => format!("Dominante {}", d.label()),
            Constitution::Dual(a, b) => format!("Dual {}-{}", a.label(), b.label()),
            Constitution::Tridoshic => "Tridóshico".to_string(),
        }
    }
}

/// Resultado final, guardado una sola vez al completar el cuestionario.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub percentages: DoshaPercentages,
    pub constitution: Constitution,
}

/// Recuento -> porcentajes -> clasificación
pub fn score(bank: &QuestionBank, answers: &[Option<usize>]) -> Option<QuizResult> {
    let tally = DoshaTally::from_answers(bank, answers);
    let percentages = DoshaPercentages::from_tally(&tally)?;
    Some(QuizResult {
        percentages,
        constitution: percentages.classify(bank.thresholds),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(n: u32) -> QuestionBank {
        QuestionBank::synthetic(n)
    }

    #[test]
    fn percentages_always_sum_to_100() {
        for v in 0..=20 {
            for p in 0..=20 {
                for k in 0..=20 {
                    let tally = DoshaTally::new(v, p, k);
                    match DoshaPercentages::from_tally(&tally) {
                        Some(pct) => assert_eq!(pct.sum(), 100, "{tally:?} -> {pct:?}"),
                        None => assert_eq!(tally.total(), 0),
                    }
                }
            }
        }
    }

    #[test]
    fn no_answers_has_no_percentages() {
        assert_eq!(DoshaPercentages::from_tally(&DoshaTally::default()), None);
        assert_eq!(score(&bank(3), &[None, None, None]), None);
    }

    #[test]
    fn two_vata_one_pitta() {
        let b = bank(3);
        let tally = DoshaTally::from_answers(&b, &[Some(0), Some(0), Some(1)]);
        assert_eq!(tally, DoshaTally::new(2, 1, 0));

        let result = score(&b, &[Some(0), Some(0), Some(1)]).expect("hay respuestas");
        assert_eq!(result.percentages, DoshaPercentages::new(67, 33, 0));
        assert_eq!(result.constitution, Constitution::Single(Dosha::Vata));
    }

    #[test]
    fn rounding_half_goes_up() {
        // 1/8 = 12.5% -> 13
        let pct = DoshaPercentages::from_tally(&DoshaTally::new(1, 7, 0)).unwrap();
        assert_eq!(pct.vata, 13);
        assert_eq!(pct.pitta, 87);
    }

    #[test]
    fn residual_goes_to_highest_raw_count() {
        // 33 + 33 + 33 = 99: empate, gana vata
        let pct = DoshaPercentages::from_tally(&DoshaTally::new(2, 2, 2)).unwrap();
        assert_eq!(pct, DoshaPercentages::new(34, 33, 33));

        // 17 + 67 + 17 = 101: se resta a pitta
        let pct = DoshaPercentages::from_tally(&DoshaTally::new(1, 4, 1)).unwrap();
        assert_eq!(pct, DoshaPercentages::new(17, 66, 17));

        // 38 + 38 + 25 = 101: empate vata/pitta, se resta a vata
        let pct = DoshaPercentages::from_tally(&DoshaTally::new(3, 3, 2)).unwrap();
        assert_eq!(pct, DoshaPercentages::new(37, 38, 25));
    }

    #[test]
    fn unknown_choice_is_skipped() {
        let b = bank(3);
        let tally = DoshaTally::from_answers(&b, &[Some(2), Some(7), None]);
        assert_eq!(tally, DoshaTally::new(0, 0, 1));
    }

    #[test]
    fn classification_boundaries() {
        let th = Thresholds::default();
        assert_eq!(
            DoshaPercentages::new(40, 35, 25).classify(th),
            Constitution::Tridoshic
        );
        assert_eq!(
            DoshaPercentages::new(45, 35, 20).classify(th),
            Constitution::Dual(Dosha::Vata, Dosha::Pitta)
        );
        assert_eq!(
            DoshaPercentages::new(60, 25, 15).classify(th),
            Constitution::Single(Dosha::Vata)
        );
        assert_eq!(
            DoshaPercentages::new(20, 35, 45).classify(th),
            Constitution::Dual(Dosha::Kapha, Dosha::Pitta)
        );
    }

    #[test]
    fn tridoshic_wins_over_dual() {
        // p0 - p1 = 5 y p0 - p2 = 10: solo se informa tridóshico
        assert_eq!(
            DoshaPercentages::new(30, 35, 35).classify(Thresholds::default()),
            Constitution::Tridoshic
        );
    }

    #[test]
    fn custom_thresholds() {
        let strict = Thresholds {
            tridoshic_spread: 0,
            dual_gap: 0,
        };
        assert_eq!(
            DoshaPercentages::new(40, 35, 25).classify(strict),
            Constitution::Single(Dosha::Vata)
        );
    }
}
