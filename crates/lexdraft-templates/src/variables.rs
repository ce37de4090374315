//! Template variable index — the set of placeholder names a template
//! references.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

// `{{ identifier }}`: ASCII letter/underscore start, alphanumeric/underscore
// continuation, optional inner whitespace.
pub(crate) static VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// All variable names referenced by a template body, duplicates collapsed.
pub fn variables_of(template_text: &str) -> BTreeSet<String> {
    VAR_RE
        .captures_iter(template_text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_variables() {
        let vars = variables_of("Hello {{ name }}, welcome to {{city}}.");
        assert!(vars.contains("name"));
        assert!(vars.contains("city"));
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn test_duplicates_collapsed_and_order_independent() {
        let a = variables_of("{{ x }} {{ y }} {{ x }}");
        let b = variables_of("{{y}} {{x}}");
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let template = "{{ lessor }} leases to {{ lessee }} at {{ property_address }}";
        assert_eq!(variables_of(template), variables_of(template));
    }

    #[test]
    fn test_identifier_rule() {
        let vars = variables_of("{{ _ok }} {{ ok_2 }} {{ 2bad }} {{ bad-name }} {{}}");
        assert!(vars.contains("_ok"));
        assert!(vars.contains("ok_2"));
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn test_empty_template() {
        assert!(variables_of("no placeholders here").is_empty());
        assert!(variables_of("").is_empty());
    }
}
