//! Reconciliation — diffing a template's variable set against supplied
//! data and filling the gap from the default catalog.

use std::collections::BTreeSet;

use serde::Serialize;

use lexdraft_core::{DataMap, DocumentType};

use crate::defaults::default_for;
use crate::variables::variables_of;

/// Result of reconciling supplied data against a template.
#[derive(Debug, Clone, Serialize)]
pub struct Reconciliation {
    /// True when the supplied data already covered every template variable.
    pub is_valid: bool,
    /// The supplied data plus a default for every missing variable.
    pub complete_data: DataMap,
    /// Variables the supplied data did not cover (before defaults).
    pub missing: BTreeSet<String>,
}

/// Compute missing variables and produce a complete data mapping.
///
/// Keys already present in `data` are never removed or overwritten, even
/// when their value is empty — presence of the key, not truthiness, marks
/// a field as supplied.
pub fn reconcile(template_text: &str, data: &DataMap, doc_type: DocumentType) -> Reconciliation {
    let required = variables_of(template_text);
    let missing: BTreeSet<String> = required
        .iter()
        .filter(|var| !data.contains_key(*var))
        .cloned()
        .collect();

    let mut complete_data = data.clone();
    for var in &missing {
        complete_data.insert(var.clone(), default_for(doc_type, var));
    }

    Reconciliation {
        is_valid: missing.is_empty(),
        complete_data,
        missing,
    }
}
