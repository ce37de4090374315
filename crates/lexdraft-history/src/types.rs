//! Row types returned by the history store.

use serde::{Deserialize, Serialize};

use lexdraft_core::{DocumentType, Language};

/// One recorded user action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub user_id: String,
    pub action: String,
    pub details: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// One archived generated document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDocument {
    pub id: i64,
    pub user_id: String,
    pub document_type: DocumentType,
    pub language: Language,
    pub title: String,
    pub content: String,
    /// The data map the document was rendered from, archived separately
    /// from the rendered text.
    pub source_data: serde_json::Value,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}
