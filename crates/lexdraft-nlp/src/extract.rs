//! Two-pass entity extraction from free-text prompts.
//!
//! Pass 1 detects person and place mentions heuristically and assigns them
//! to role slots in a fixed priority order. Pass 2 runs regex searches for
//! amounts, dates, durations, and clause phrases; the first match of each
//! pattern is broadcast to every semantically related field. Pattern-pass
//! writes land second and win on any overlap.

pub mod ner;
pub mod patterns;
pub mod slots;

use lexdraft_core::DataMap;

/// Extract a field-name → value mapping from free text.
///
/// Empty text yields an empty mapping. Fields with no match are absent
/// from the mapping, never present with an empty value.
pub fn extract(text: &str) -> DataMap {
    let mut entities = DataMap::new();
    if text.trim().is_empty() {
        return entities;
    }

    for (_, person) in ner::person_mentions(text) {
        slots::fill_first_open_slot(&mut entities, slots::PERSON_SLOTS, &person);
    }
    for (_, place) in ner::place_mentions(text) {
        slots::fill_first_open_slot(&mut entities, slots::PLACE_SLOTS, &place);
    }

    patterns::apply_pattern_fields(text, &mut entities);
    entities
}
