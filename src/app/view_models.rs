use super::*;

impl PrakritiApp {
    pub fn variant_infos(&self) -> Vec<VariantInfo> {
        QuizVariant::ALL
            .iter()
            .filter_map(|v| self.engines.get(v).map(|e| (*v, e)))
            .map(|(variant, engine)| VariantInfo {
                variant,
                title: engine.bank().title.clone(),
                question_count: engine.question_count(),
                answered: engine.answered_count(),
                completed: engine.is_completed(),
            })
            .collect()
    }

    pub fn result_view(&self) -> Option<ResultView> {
        self.engine()?.result().map(ResultView::from_result)
    }

    /// Barras de la distribución provisional mientras se responde
    pub fn running_bars(&self) -> Vec<DoshaBar> {
        let Some(pct) = self.engine().and_then(|e| e.running_percentages()) else {
            return Vec::new();
        };
        pct.ranked()
            .iter()
            .map(|&(dosha, percent)| DoshaBar {
                dosha,
                percent,
                highlighted: false,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::app::PrakritiApp;
    use crate::model::QuizVariant;

    #[test]
    fn variant_infos_list_both_banks() {
        let app = PrakritiApp::new(None).expect("bancos embebidos");
        let infos = app.variant_infos();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].variant, QuizVariant::Full);
        assert_eq!(infos[0].question_count, 20);
        assert_eq!(infos[1].question_count, 3);
        assert!(infos.iter().all(|i| !i.completed && i.answered == 0));
    }

    #[test]
    fn running_bars_appear_after_first_answer() {
        let mut app = PrakritiApp::new(None).expect("bancos embebidos");
        app.seleccionar_variante(QuizVariant::Full);
        assert!(app.running_bars().is_empty());

        app.elegir_opcion(1, 0.0);
        let bars = app.running_bars();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].percent, 100);
        assert_eq!(bars[0].dosha.label(), "Pitta");
    }
}
