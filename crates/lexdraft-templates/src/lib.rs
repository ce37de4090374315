//! Template handling — variable indexing, default catalog, reconciliation,
//! and rendering with language fallback.

pub mod defaults;
pub mod reconcile;
pub mod render;
pub mod variables;

pub use defaults::default_for;
pub use reconcile::{reconcile, Reconciliation};
pub use render::{render_template, TemplateDir};
pub use variables::variables_of;
