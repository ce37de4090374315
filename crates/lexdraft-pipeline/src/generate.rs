//! Form-driven and prompt-driven document generation.

use std::str::FromStr;
use std::sync::Arc;

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use lexdraft_core::{DataMap, DocumentType, Error, Language, LexdraftConfig, Result};
use lexdraft_history::HistoryStore;
use lexdraft_nlp::{classify, extract, tag_entities};
use lexdraft_templates::{reconcile, render_template, TemplateDir};
use lexdraft_translate::{translate_data, MyMemoryTranslator, Translator};

use crate::types::GeneratedDocument;

// "in <word>" phrases, checked against known language names only.
static LANGUAGE_REQUEST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bin\s+([A-Za-z]+)").unwrap());

/// The document pipeline. Constructed once at process start; all state is
/// read-only after construction, safe to share across request handlers.
pub struct DocumentPipeline {
    templates: TemplateDir,
    translator: Arc<dyn Translator>,
    history: Option<Arc<HistoryStore>>,
}

impl DocumentPipeline {
    pub fn new(templates: TemplateDir, translator: Arc<dyn Translator>) -> Self {
        Self {
            templates,
            translator,
            history: None,
        }
    }

    /// Attach a history store. Without one, history calls are no-ops.
    pub fn with_history(mut self, history: Arc<HistoryStore>) -> Self {
        self.history = Some(history);
        self
    }

    /// Build the standard pipeline from configuration: templates from the
    /// configured directory, MyMemory translation, SQLite history.
    pub fn from_config(config: &LexdraftConfig) -> Result<Self> {
        let translator = MyMemoryTranslator::new(config.translation_timeout_secs)?;
        let history = HistoryStore::open(&config.data_paths.history)?;
        Ok(Self::new(
            TemplateDir::new(&config.data_paths.templates),
            Arc::new(translator),
        )
        .with_history(Arc::new(history)))
    }

    /// Generate a document from structured form input.
    ///
    /// An unknown document type is rejected before any processing. An
    /// unsupported language code falls back to the base language.
    pub fn generate_from_form(
        &self,
        user_id: Option<&str>,
        doc_type: &str,
        language: &str,
        data: &DataMap,
    ) -> Result<GeneratedDocument> {
        let doc_type = DocumentType::from_str(doc_type)?;
        let language = self.resolve_language(language);

        let generated = self.run(doc_type, language, data.clone())?;

        self.record(
            user_id,
            "generate_document",
            &format!("Generated {doc_type} in {language}"),
            &generated,
            data,
        );
        Ok(generated)
    }

    /// Generate a document from a free-text prompt.
    ///
    /// The prompt is classified into a document type (failure is surfaced,
    /// never silently defaulted), entities are extracted from it, and a
    /// trailing "in <language>" request is honored when it names a known
    /// language.
    pub fn generate_from_prompt(
        &self,
        user_id: Option<&str>,
        prompt: &str,
    ) -> Result<GeneratedDocument> {
        let language = detect_language_request(prompt).unwrap_or(Language::En);
        let doc_type = classify(prompt).ok_or(Error::ClassificationFailed)?;
        info!("classified prompt as {doc_type}");

        let entities = extract(prompt);
        debug!("extracted {} fields from prompt", entities.len());

        let generated = self.run(doc_type, language, entities.clone())?;

        self.record(
            user_id,
            "generate_from_prompt",
            &format!("Generated {doc_type} from prompt in {language}"),
            &generated,
            &entities,
        );
        Ok(generated)
    }

    // Shared tail: translate → reconcile → render → tag.
    fn run(
        &self,
        doc_type: DocumentType,
        language: Language,
        data: DataMap,
    ) -> Result<GeneratedDocument> {
        let mut data = if language.is_base() {
            data
        } else {
            translate_data(self.translator.as_ref(), &data, language)
        };

        // Today's date goes in ahead of reconciliation so the catalog's
        // "Date not specified" entry never shadows the clock. The renderer
        // re-injects it as a backstop for direct render calls.
        data.entry("date".to_string())
            .or_insert_with(|| Local::now().format("%B %d, %Y").to_string());

        let template = self.templates.load(doc_type, language)?;
        let reconciliation = reconcile(&template, &data, doc_type);
        if !reconciliation.is_valid {
            debug!(
                "{} missing variables filled with defaults for {doc_type}",
                reconciliation.missing.len()
            );
        }

        let content = render_template(&template, &reconciliation.complete_data)?;
        let entities = tag_entities(&content);

        Ok(GeneratedDocument {
            doc_type,
            language,
            content,
            entities,
        })
    }

    fn resolve_language(&self, code: &str) -> Language {
        match Language::from_code(code) {
            Some(language) => language,
            None => {
                debug!("unsupported language code {code:?}; falling back to en");
                Language::En
            }
        }
    }

    // Best-effort history: record the action and archive the document.
    fn record(
        &self,
        user_id: Option<&str>,
        action: &str,
        details: &str,
        generated: &GeneratedDocument,
        source_data: &DataMap,
    ) {
        let Some(history) = &self.history else {
            return;
        };
        history.record_action(user_id, action, details);

        let title = format!(
            "{} - {}",
            generated.doc_type.title(),
            Local::now().format("%Y-%m-%d %H:%M")
        );
        history.save_document(
            user_id,
            generated.doc_type,
            generated.language,
            &title,
            &generated.content,
            source_data,
        );
    }
}

/// Find a requested output language in a prompt.
///
/// Only known language display names count: "agreement in Tamil" requests
/// Tamil, while "flat in Chennai" requests nothing.
pub fn detect_language_request(prompt: &str) -> Option<Language> {
    LANGUAGE_REQUEST_RE
        .captures_iter(prompt)
        .filter_map(|caps| caps.get(1))
        .find_map(|m| Language::from_display_name(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language_request_known_name() {
        assert_eq!(
            detect_language_request("rental agreement in Tamil"),
            Some(Language::Ta)
        );
        assert_eq!(
            detect_language_request("sale deed in hindi please"),
            Some(Language::Hi)
        );
    }

    #[test]
    fn test_detect_language_request_ignores_places() {
        assert_eq!(detect_language_request("a flat in Chennai"), None);
        assert_eq!(detect_language_request("no language here"), None);
    }

    #[test]
    fn test_detect_language_request_skips_to_known_name() {
        // First "in" phrase is a place; the language request comes later.
        assert_eq!(
            detect_language_request("a flat in Chennai, agreement in Telugu"),
            Some(Language::Te)
        );
    }
}
