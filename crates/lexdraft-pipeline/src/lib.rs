//! Request-scoped orchestration of the document pipeline: classification,
//! extraction, translation, reconciliation, rendering, and best-effort
//! history.

pub mod generate;
pub mod types;

pub use generate::DocumentPipeline;
pub use types::GeneratedDocument;
