use crate::data::read_bank;
use crate::engine::{QuizEngine, Step, storage_keys};
use crate::error::BankError;
use crate::model::{AppState, QuizVariant};
use crate::storage::MemoryStore;
use eframe::egui;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{DoshaBar, ResultView, VariantInfo};

/// Cada cuánto vuelca eframe los almacenes a disco (su valor por defecto son 30 s)
pub const AUTO_SAVE_INTERVAL: Duration = Duration::from_secs(2);

/// Preferencias que se guardan con `eframe::set_value` bajo `APP_KEY`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub auto_advance: bool,
    pub advance_delay_ms: u64, // pausa antes de avanzar solo, para ver la opción marcada
    pub last_variant: Option<QuizVariant>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auto_advance: true,
            advance_delay_ms: 400,
            last_variant: None,
        }
    }
}

pub struct PrakritiApp {
    pub engines: HashMap<QuizVariant, QuizEngine<MemoryStore>>,
    pub selected_variant: Option<QuizVariant>,
    pub settings: AppSettings,
    pub message: String,
    pub state: AppState,
    pub confirm_reset: bool,
    pub pending_advance: Option<f64>, // instante (reloj de egui, en segundos) del avance automático
}

impl PrakritiApp {
    /// Carga los bancos embebidos y retoma lo guardado en `storage`, si lo hay
    pub fn new(storage: Option<&dyn eframe::Storage>) -> Result<Self, BankError> {
        let mut engines = HashMap::new();
        for variant in QuizVariant::ALL {
            let bank = read_bank(variant)?;
            let keys = storage_keys(&bank.name);
            let store = storage
                .map(|s| MemoryStore::seed_from(s, &keys))
                .unwrap_or_default();
            debug!("{variant:?}: {} claves restauradas", store.len());
            engines.insert(variant, QuizEngine::open(bank, store));
        }

        let settings: AppSettings = storage
            .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
            .unwrap_or_default();

        let mut app = Self {
            engines,
            selected_variant: None,
            settings,
            message: String::new(),
            state: AppState::VariantSelect,
            confirm_reset: false,
            pending_advance: None,
        };

        if let Some(variant) = app.settings.last_variant {
            info!("retomando la variante {variant:?}");
            app.selected_variant = Some(variant);
            app.state = AppState::Welcome;
        }

        Ok(app)
    }

    // Accesores seguros
    pub fn engine(&self) -> Option<&QuizEngine<MemoryStore>> {
        self.selected_variant.and_then(|v| self.engines.get(&v))
    }

    pub fn engine_mut(&mut self) -> Option<&mut QuizEngine<MemoryStore>> {
        self.selected_variant.and_then(|v| self.engines.get_mut(&v))
    }

    /// Vuelca los almacenes de todos los motores y las preferencias a eframe
    pub fn save_to(&self, storage: &mut dyn eframe::Storage) {
        for engine in self.engines.values() {
            engine.store().flush_into(storage, &engine.storage_keys());
        }
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }
}
