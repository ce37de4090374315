//! Machine-translation boundary — a `Translator` trait, the MyMemory HTTP
//! client, and the per-field degrade-to-original policy.
//!
//! Translation is strictly best-effort: one attempt per field with a short
//! deadline, and any failure keeps the untranslated value. A failing
//! translator never blocks or aborts generation.

pub mod mymemory;

use std::collections::HashMap;

use tracing::warn;

use lexdraft_core::{DataMap, Language, Result};

pub use mymemory::MyMemoryTranslator;

/// A text translation backend. Constructed once at process start and
/// injected into the pipeline; implementations must be safe to share
/// across request-handling threads.
pub trait Translator: Send + Sync {
    /// Translate `text` from the base language to `target`. Single
    /// attempt; implementations apply their own deadline.
    fn translate(&self, text: &str, target: Language) -> Result<String>;
}

/// Translate every value of a data map independently.
///
/// The base language and empty values pass through unchanged. A field
/// whose translation fails keeps its original value — one bad field never
/// affects the others. Results keep their field keys, so ordering by key
/// is preserved regardless of call order.
pub fn translate_data(translator: &dyn Translator, data: &DataMap, target: Language) -> DataMap {
    if target.is_base() {
        return data.clone();
    }

    data.iter()
        .map(|(key, value)| {
            if value.trim().is_empty() {
                return (key.clone(), value.clone());
            }
            match translator.translate(value, target) {
                Ok(translated) => (key.clone(), translated),
                Err(e) => {
                    warn!("translation of field {key} failed: {e}; keeping original");
                    (key.clone(), value.clone())
                }
            }
        })
        .collect()
}

/// Fixed-lookup translator for tests and offline runs. Unmapped text
/// passes through unchanged.
#[derive(Debug, Default)]
pub struct StaticTranslator {
    entries: HashMap<(String, Language), String>,
}

impl StaticTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, target: Language, translated: &str) -> Self {
        self.entries
            .insert((text.to_string(), target), translated.to_string());
        self
    }
}

impl Translator for StaticTranslator {
    fn translate(&self, text: &str, target: Language) -> Result<String> {
        Ok(self
            .entries
            .get(&(text.to_string(), target))
            .cloned()
            .unwrap_or_else(|| text.to_string()))
    }
}
