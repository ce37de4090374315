//! User-history/document store boundary — best-effort persistence of
//! generation activity and finished documents.
//!
//! Recording history must never block the primary function of producing a
//! document: every write tolerates an absent user and logs instead of
//! raising on store errors.

pub mod schema;
pub mod store;
pub mod types;

pub use store::HistoryStore;
pub use types::{HistoryEntry, SavedDocument};
