//! Pipeline input/output types.

use serde::{Deserialize, Serialize};

use lexdraft_core::{DocumentType, Language};

/// A finished generation: the rendered document plus entities tagged in it
/// for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub doc_type: DocumentType,
    pub language: Language,
    pub content: String,
    /// `(entity_text, entity_label)` pairs from the final text.
    pub entities: Vec<(String, String)>,
}
