use std::collections::HashMap;

/// Almacén clave-valor local donde el motor guarda su progreso y su resultado.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Almacén en memoria. La app lo vuelca a `eframe::Storage` en cada `save`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copia desde el almacenamiento de eframe las claves indicadas.
    /// Una cadena vacía cuenta como clave borrada.
    pub fn seed_from(storage: &dyn eframe::Storage, keys: &[String]) -> Self {
        let mut store = Self::new();
        for key in keys {
            if let Some(value) = storage.get_string(key) {
                if !value.is_empty() {
                    store.entries.insert(key.clone(), value);
                }
            }
        }
        store
    }

    /// Vuelca las claves indicadas al almacenamiento de eframe; las que ya no
    /// existen se escriben vacías porque `eframe::Storage` no sabe borrar.
    pub fn flush_into(&self, storage: &mut dyn eframe::Storage, keys: &[String]) {
        for key in keys {
            let value = self.entries.get(key).cloned().unwrap_or_default();
            storage.set_string(key, value);
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
