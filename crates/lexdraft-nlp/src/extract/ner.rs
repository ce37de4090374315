//! Heuristic person and place mention detection — the stand-in for a
//! general-purpose NER model. Exact entity boundaries are not
//! contract-critical; the slot-assignment order downstream is.

use once_cell::sync::Lazy;
use regex::Regex;

static HONORIFIC_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Mrs|Mr|Ms|Dr|Prof)\.?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?").unwrap()
});

// Two consecutive capitalized words, likely a bare name.
static BARE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b").unwrap());

static PLACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:at|in)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)").unwrap());

/// Person mentions with their byte offsets, in order of appearance.
///
/// Honorific-prefixed names ("Mr. John", "Dr. Chitra Devi") take precedence
/// over bare capitalized pairs covering the same span. A bare pair at the
/// very start of the text is skipped — more likely a sentence opener than
/// a name.
pub fn person_mentions(text: &str) -> Vec<(usize, String)> {
    let mut spans: Vec<(usize, usize, String)> = HONORIFIC_NAME_RE
        .find_iter(text)
        .map(|m| (m.start(), m.end(), m.as_str().to_string()))
        .collect();

    for m in BARE_NAME_RE.find_iter(text) {
        if m.start() == 0 {
            continue;
        }
        let overlaps = spans.iter().any(|(s, e, _)| m.start() < *e && *s < m.end());
        if !overlaps {
            spans.push((m.start(), m.end(), m.as_str().to_string()));
        }
    }

    spans.sort_by_key(|(s, _, _)| *s);
    spans.into_iter().map(|(s, _, t)| (s, t)).collect()
}

/// Place mentions ("at X" / "in X" capitalized phrases) with byte offsets,
/// in order of appearance. Duplicate mentions are kept — each occurrence
/// claims its own slot downstream, as a tagging model's output would.
pub fn place_mentions(text: &str) -> Vec<(usize, String)> {
    PLACE_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| (m.start(), m.as_str().to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honorific_names() {
        let mentions = person_mentions("between Mr. John and Ms. Jane");
        let names: Vec<&str> = mentions.iter().map(|(_, n)| n.as_str()).collect();
        assert_eq!(names, vec!["Mr. John", "Ms. Jane"]);
    }

    #[test]
    fn test_honorific_covers_two_word_name() {
        let mentions = person_mentions("signed by Dr. Chitra Devi today");
        assert_eq!(mentions[0].1, "Dr. Chitra Devi");
    }

    #[test]
    fn test_bare_name_pair() {
        let mentions = person_mentions("the seller Arun Kumar agreed");
        assert_eq!(mentions[0].1, "Arun Kumar");
    }

    #[test]
    fn test_bare_pair_inside_honorific_not_duplicated() {
        let mentions = person_mentions("witness Mr. Arun Kumar was present");
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].1, "Mr. Arun Kumar");
    }

    #[test]
    fn test_bare_pair_at_text_start_skipped() {
        let mentions = person_mentions("Rental Agreement follows below");
        assert!(mentions.is_empty());
    }

    #[test]
    fn test_places() {
        let mentions = place_mentions("a flat in Chennai near the office at Anna Nagar");
        let places: Vec<&str> = mentions.iter().map(|(_, p)| p.as_str()).collect();
        assert_eq!(places, vec!["Chennai", "Anna Nagar"]);
    }

    #[test]
    fn test_lowercase_place_not_matched() {
        assert!(place_mentions("a flat in chennai").is_empty());
    }
}
