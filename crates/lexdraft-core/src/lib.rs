//! Lexdraft Core — document type registry, languages, errors, configuration.

pub mod config;
pub mod doctype;
pub mod error;
pub mod language;

pub use config::{DataPaths, LexdraftConfig};
pub use doctype::{DocumentType, DocumentTypeSpec};
pub use error::{Error, Result};
pub use language::Language;

use std::collections::BTreeMap;

/// Variable name → string value mapping assembled for a single generation
/// request. Merge priority is defaults < extracted entities < explicit form
/// values; presence of a key (not truthiness) marks a field as supplied.
pub type DataMap = BTreeMap<String, String>;
