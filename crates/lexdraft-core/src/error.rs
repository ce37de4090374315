//! Error types for lexdraft.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No keyword of any document type matched the prompt. User-actionable,
    /// not fatal.
    #[error("could not determine document type from the prompt")]
    ClassificationFailed,

    /// Caller supplied a type outside the enumerated set. Rejected before
    /// any processing.
    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),

    /// The base-language template file itself is missing or unreadable.
    /// Localized template failures are recovered via fallback and never
    /// produce this.
    #[error("no base template for document type: {0}")]
    TemplateNotFound(String),

    /// A template variable had no value at substitution time. Backstop
    /// against a reconciler or catalog gap; a silently blank field would
    /// produce a legally incorrect document.
    #[error("template variable has no value at render time: {variable}")]
    Rendering { variable: String },

    /// Translation call failed. Always recovered per-field by keeping the
    /// original value; never surfaced to the caller of a generation request.
    #[error("translation failed: {0}")]
    Translation(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
