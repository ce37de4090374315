//! Template loading with language fallback, and literal substitution.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, warn};

use lexdraft_core::{DataMap, DocumentType, Error, Language, Result};

use crate::variables::VAR_RE;

/// A template directory: base-language files at the root, localized copies
/// under `<lang>/` subdirectories.
#[derive(Debug, Clone)]
pub struct TemplateDir {
    root: PathBuf,
}

impl TemplateDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the template body for a document type in the requested
    /// language.
    ///
    /// A missing localized file falls back to the base file silently; a
    /// localized file that exists but cannot be read is logged and falls
    /// back. Only a missing base-language file is an error.
    pub fn load(&self, doc_type: DocumentType, language: Language) -> Result<String> {
        let spec = doc_type.spec();

        if !language.is_base() {
            let localized = self.root.join(language.code()).join(spec.template_file);
            if localized.exists() {
                match std::fs::read_to_string(&localized) {
                    Ok(body) => return Ok(body),
                    Err(e) => {
                        warn!(
                            "failed to read localized template {}: {e}; falling back to base",
                            localized.display()
                        );
                    }
                }
            } else {
                debug!(
                    "no {} template for {doc_type}; falling back to base",
                    language.code()
                );
            }
        }

        let base = self.root.join(spec.template_file);
        std::fs::read_to_string(&base)
            .map_err(|_| Error::TemplateNotFound(doc_type.as_str().to_string()))
    }

    /// Load, inject the current date, and substitute.
    pub fn render(
        &self,
        doc_type: DocumentType,
        language: Language,
        data: &DataMap,
    ) -> Result<String> {
        let template = self.load(doc_type, language)?;
        render_template(&template, data)
    }
}

/// Substitute a template body against `data`, injecting today's date.
///
/// The `date` key is set to the current date ("April 05, 2025" style) only
/// when absent — after reconciliation, so the write is not subject to the
/// default catalog. Every placeholder must resolve; a variable with no
/// value is a rendering error, never a silent blank.
pub fn render_template(template: &str, data: &DataMap) -> Result<String> {
    let mut data = data.clone();
    data.entry("date".to_string())
        .or_insert_with(|| Local::now().format("%B %d, %Y").to_string());

    substitute(template, &data)
}

fn substitute(template: &str, data: &DataMap) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in VAR_RE.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = data.get(name.as_str()).ok_or_else(|| Error::Rendering {
            variable: name.as_str().to_string(),
        })?;
        out.push_str(&template[last..whole.start()]);
        out.push_str(value);
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}
