mod helpers;
pub mod layout;
pub mod views;

use crate::app::{AUTO_SAVE_INTERVAL, PrakritiApp};
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for PrakritiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Avance automático pendiente tras elegir opción
        let now = ctx.input(|i| i.time);
        if self.poll_auto_advance(now) {
            ctx.request_repaint();
        } else if let Some(deadline) = self.pending_advance {
            ctx.request_repaint_after(Duration::from_secs_f64((deadline - now).max(0.0)));
        }

        // BOTÓN SUPERIOR DE REINICIAR y CAMBIAR TEST (reiniciar solo durante el quiz y el resultado)
        if matches!(self.state, AppState::Quiz | AppState::Result) {
            top_panel(self, ctx, true);
        } else if matches!(self.state, AppState::Welcome) {
            top_panel(self, ctx, false);
        }

        // PANEL INFERIOR: tema y avance automático
        bottom_panel(self, ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::VariantSelect => views::variant::ui_variant_select(self, ctx),
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Result => views::result::ui_result(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.save_to(storage);
    }

    fn auto_save_interval(&self) -> Duration {
        AUTO_SAVE_INTERVAL
    }
}
