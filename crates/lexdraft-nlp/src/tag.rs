//! Entity tagging over final document text, for display alongside the
//! generated document.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::{ner, patterns};

// Display tagging wants currency context; the extraction amount pattern is
// deliberately looser and would tag every bare number in a legal document.
static CURRENCY_AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Rs\.?|INR)\s*\d+(?:,\d+)*(?:\.\d{2})?|\d+(?:,\d+)*(?:\.\d{2})?\s*rupees?")
        .unwrap()
});

/// Tag person, location, date, amount, and duration mentions in `text`.
///
/// Returns `(entity_text, entity_label)` pairs in order of first
/// appearance, de-duplicated.
pub fn tag_entities(text: &str) -> Vec<(String, String)> {
    let mut tagged: Vec<(usize, String, &'static str)> = Vec::new();

    for (start, person) in ner::person_mentions(text) {
        tagged.push((start, person, "PERSON"));
    }
    for (start, place) in ner::place_mentions(text) {
        tagged.push((start, place, "LOC"));
    }
    for m in patterns::DATE_RE.find_iter(text) {
        tagged.push((m.start(), m.as_str().to_string(), "DATE"));
    }
    for m in CURRENCY_AMOUNT_RE.find_iter(text) {
        tagged.push((m.start(), m.as_str().to_string(), "AMOUNT"));
    }
    for m in patterns::DURATION_RE.find_iter(text) {
        tagged.push((m.start(), m.as_str().to_string(), "DURATION"));
    }

    tagged.sort_by_key(|(start, _, _)| *start);

    let mut seen: HashSet<(String, &'static str)> = HashSet::new();
    tagged
        .into_iter()
        .filter(|(_, text, label)| seen.insert((text.clone(), label)))
        .map(|(_, text, label)| (text, label.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_persons_and_places() {
        let tags = tag_entities("This agreement is between Mr. John and Ms. Jane in Chennai.");
        assert!(tags.contains(&("Mr. John".to_string(), "PERSON".to_string())));
        assert!(tags.contains(&("Ms. Jane".to_string(), "PERSON".to_string())));
        assert!(tags.contains(&("Chennai".to_string(), "LOC".to_string())));
    }

    #[test]
    fn test_tags_amounts_only_with_currency_context() {
        let tags = tag_entities("monthly rent of Rs 15,000 for 3 rooms");
        assert!(tags.contains(&("Rs 15,000".to_string(), "AMOUNT".to_string())));
        assert!(!tags.iter().any(|(t, l)| l == "AMOUNT" && t == "3"));
    }

    #[test]
    fn test_tags_ordered_by_first_appearance() {
        let tags = tag_entities("signed on 1st April 2024 by Mr. Ravi in Mumbai");
        let labels: Vec<&str> = tags.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(labels, vec!["DATE", "PERSON", "LOC"]);
    }

    #[test]
    fn test_duplicates_collapsed() {
        let tags = tag_entities("Chennai is fine. The property in Chennai stands.");
        let loc_count = tags.iter().filter(|(t, l)| t == "Chennai" && l == "LOC").count();
        assert_eq!(loc_count, 1);
    }
}
