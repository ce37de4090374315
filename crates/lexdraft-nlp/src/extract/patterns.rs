//! Regex pattern pass — amounts, dates, durations, and clause phrases.

use lexdraft_core::DataMap;
use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Rs\.?|INR)?\s*(\d+(?:,\d+)*(?:\.\d{2})?)\s*(?:rupees?|Rs\.?|INR)?")
        .unwrap()
});

pub(crate) static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d{1,2}[-/]\d{1,2}[-/]\d{4}|\d{1,2}(?:st|nd|rd|th)?\s+(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+\d{4}",
    )
    .unwrap()
});

pub(crate) static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:year|month|week|day)s?").unwrap());

static PROPERTY_CLAUSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)a property located at (.+?)(?:\.|,|$)").unwrap());

static PURPOSE_CLAUSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)for (.+?) purposes").unwrap());

/// Fields populated from a single amount match.
pub const AMOUNT_FIELDS: &[&str] = &["rent_amount", "sale_amount", "lease_amount"];

/// Fields populated from a single date match.
pub const DATE_FIELDS: &[&str] = &["start_date", "effective_date", "expiry_date", "sale_date"];

/// Fields populated from a single duration match.
pub const DURATION_FIELDS: &[&str] =
    &["duration", "renewal_period", "lease_period", "notice_period"];

/// Apply all pattern searches to `text`, writing into `entities`.
///
/// Only the first match of each pattern is used; one match populates every
/// related field with the same value, so fields that may legitimately
/// differ (say, `sale_date` and `expiry_date`) receive one shared guess.
/// Known precision limit, kept for compatibility — callers needing
/// distinct values must supply them explicitly.
pub fn apply_pattern_fields(text: &str, entities: &mut DataMap) {
    if let Some(caps) = AMOUNT_RE.captures(text) {
        if let Some(amount) = caps.get(1) {
            broadcast(entities, AMOUNT_FIELDS, amount.as_str());
        }
    }

    if let Some(m) = DATE_RE.find(text) {
        broadcast(entities, DATE_FIELDS, m.as_str());
    }

    if let Some(m) = DURATION_RE.find(text) {
        broadcast(entities, DURATION_FIELDS, m.as_str());
    }

    if !entities.contains_key("property_description") {
        if let Some(caps) = PROPERTY_CLAUSE_RE.captures(text) {
            entities.insert(
                "property_description".to_string(),
                caps[1].trim().to_string(),
            );
        }
    }

    if !entities.contains_key("matter_description") {
        if let Some(caps) = PURPOSE_CLAUSE_RE.captures(text) {
            entities.insert(
                "matter_description".to_string(),
                format!("{} purposes", caps[1].trim()),
            );
        }
    }
}

fn broadcast(entities: &mut DataMap, fields: &[&str], value: &str) {
    for field in fields {
        entities.insert(field.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_with_currency_prefix() {
        let mut entities = DataMap::new();
        apply_pattern_fields("rent Rs 15,000 per month", &mut entities);
        assert_eq!(entities["rent_amount"], "15,000");
    }

    #[test]
    fn test_amount_with_decimal() {
        let mut entities = DataMap::new();
        apply_pattern_fields("INR 1,500.50 payable", &mut entities);
        assert_eq!(entities["rent_amount"], "1,500.50");
    }

    #[test]
    fn test_numeric_date_format() {
        let mut entities = DataMap::new();
        apply_pattern_fields("starting 01/04/2024", &mut entities);
        assert_eq!(entities["start_date"], "01/04/2024");
    }

    #[test]
    fn test_ordinal_month_date_format() {
        let mut entities = DataMap::new();
        apply_pattern_fields("valid until 31st March 2025", &mut entities);
        assert_eq!(entities["expiry_date"], "31st March 2025");
    }

    #[test]
    fn test_duration_keeps_whole_phrase() {
        let mut entities = DataMap::new();
        apply_pattern_fields("for 11 months from now", &mut entities);
        assert_eq!(entities["duration"], "11 months");
        assert_eq!(entities["lease_period"], "11 months");
    }

    #[test]
    fn test_pattern_pass_overwrites_existing_keys() {
        let mut entities = DataMap::new();
        entities.insert("rent_amount".to_string(), "stale".to_string());
        apply_pattern_fields("Rs 9,000", &mut entities);
        assert_eq!(entities["rent_amount"], "9,000");
    }

    #[test]
    fn test_purpose_clause_keeps_suffix() {
        let mut entities = DataMap::new();
        apply_pattern_fields("attorney for property management purposes", &mut entities);
        assert_eq!(entities["matter_description"], "property management purposes");
    }

    #[test]
    fn test_property_clause_stops_at_comma() {
        let mut entities = DataMap::new();
        apply_pattern_fields(
            "selling a property located at 5 Beach Road, with two floors",
            &mut entities,
        );
        assert_eq!(entities["property_description"], "5 Beach Road");
    }
}
