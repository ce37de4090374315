//! Keyword-based document type classification.

use lexdraft_core::DocumentType;

/// Raw keyword-hit counts per document type, in declaration order.
///
/// Matching is plain substring containment on the lowercased text, not
/// word-boundary-aware: a keyword occurring inside a longer word still
/// counts. Kept for compatibility with the established behavior.
pub fn classification_scores(text: &str) -> Vec<(DocumentType, usize)> {
    let text_lower = text.to_lowercase();
    DocumentType::ALL
        .iter()
        .map(|dt| {
            let hits = dt
                .spec()
                .keywords
                .iter()
                .filter(|kw| text_lower.contains(*kw))
                .count();
            (*dt, hits)
        })
        .collect()
}

/// Classify free text into a document type.
///
/// Returns the type with the most keyword hits; ties go to the first
/// declared type. Returns `None` when no keyword of any type matches —
/// callers must surface that as a classification failure, not pick a
/// silent default.
pub fn classify(text: &str) -> Option<DocumentType> {
    let mut best: Option<(DocumentType, usize)> = None;
    for (dt, score) in classification_scores(text) {
        // Strictly greater keeps the first declared type on ties, and the
        // zero-initialized threshold keeps all-zero inputs at None.
        if score > best.map(|(_, s)| s).unwrap_or(0) {
            best = Some((dt, score));
        }
    }
    best.map(|(dt, _)| dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rental_agreement() {
        let dt = classify("Rental agreement between Mr. John and Ms. Jane, rent Rs 15,000");
        assert_eq!(dt, Some(DocumentType::RentalAgreement));
    }

    #[test]
    fn test_classify_power_of_attorney() {
        let dt = classify("I want to delegate authority to act on my behalf");
        assert_eq!(dt, Some(DocumentType::PowerOfAttorney));
    }

    #[test]
    fn test_classify_no_keywords_returns_none() {
        assert_eq!(classify("write me a poem about spring"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_classify_single_type_keywords_only() {
        // "deed" and "purchase" belong only to land_sale_deed.
        let dt = classify("draft a deed for the purchase");
        assert_eq!(dt, Some(DocumentType::LandSaleDeed));
    }

    #[test]
    fn test_tie_goes_to_first_declared_type() {
        // "lease" scores for both rental_agreement and house_lease;
        // rental_agreement is declared first.
        let dt = classify("a lease");
        assert_eq!(dt, Some(DocumentType::RentalAgreement));
    }

    #[test]
    fn test_substring_containment_not_word_boundary() {
        // "rental" occurs inside "parental"; still counts as a hit.
        let dt = classify("parental");
        assert_eq!(dt, Some(DocumentType::RentalAgreement));
    }

    #[test]
    fn test_scores_cover_every_type_in_order() {
        let scores = classification_scores("tenant landlord seller buyer");
        let types: Vec<DocumentType> = scores.iter().map(|(dt, _)| *dt).collect();
        assert_eq!(types, DocumentType::ALL.to_vec());
        assert_eq!(scores[0].1, 2); // tenant + landlord
        assert_eq!(scores[1].1, 2); // seller + buyer
    }
}
