//! Heuristic NLP for document intents — classifies a free-text request into
//! a document type, extracts structured field values, and tags entities in
//! generated documents for display.
//!
//! Keyword matching, regex patterns, and ordered slot filling replace the
//! original's spaCy model; only the slot-assignment policy is
//! contract-bearing, so any off-the-shelf NER could be substituted.

pub mod classify;
pub mod extract;
pub mod tag;

pub use classify::{classification_scores, classify};
pub use extract::extract;
pub use tag::tag_entities;
