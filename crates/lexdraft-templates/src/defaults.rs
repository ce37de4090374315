//! Default/fallback catalog — human-readable "not specified" values for
//! template variables the caller did not supply.
//!
//! Lookup is layered: a document-type-specific default first, then a
//! global default, then the literal `[<field> not specified]` string.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use lexdraft_core::DocumentType;

/// Defaults shared by every document type.
static GLOBAL_DEFAULTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("date", "Date not specified");
    m.insert("month", "Month not specified");
    m.insert("year", "Year not specified");
    m.insert("execution_date", "Date not specified");
    m.insert("execution_place", "Place not specified");
    m.insert("witness1_name", "Witness 1 name not specified");
    m.insert("witness1_address", "Witness 1 address not specified");
    m.insert("witness2_name", "Witness 2 name not specified");
    m.insert("witness2_address", "Witness 2 address not specified");
    m.insert("jurisdiction", "Jurisdiction not specified");
    m
});

/// Per-type overrides. House lease documents carry the richest field set
/// and get readable defaults for all of it.
static HOUSE_LEASE_DEFAULTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("lessor", "Lessor name not specified");
    m.insert("lessor_age", "Age not specified");
    m.insert("lessor_father", "Father name not specified");
    m.insert("lessor_address", "Address not specified");
    m.insert("lessor_city", "City not specified");
    m.insert("lessor_pincode", "Pincode not specified");
    m.insert("lessee", "Lessee name not specified");
    m.insert("lessee_age", "Age not specified");
    m.insert("lessee_father", "Father name not specified");
    m.insert("lessee_address", "Address not specified");
    m.insert("lessee_city", "City not specified");
    m.insert("lessee_pincode", "Pincode not specified");
    m.insert("property_address", "Property address not specified");
    m.insert("property_city", "Property city not specified");
    m.insert("property_pincode", "Property pincode not specified");
    m.insert("lease_period", "Lease period not specified");
    m.insert("start_date", "Start date not specified");
    m.insert("end_date", "End date not specified");
    m.insert("lease_amount", "Amount not specified");
    m.insert("lease_amount_words", "Amount in words not specified");
    m.insert("rent_due_date", "Due date not specified");
    m.insert("security_deposit", "Security deposit not specified");
    m.insert("security_deposit_words", "Security deposit in words not specified");
    m.insert("notice_period", "Notice period not specified");
    m.insert("number_of_rooms", "Number of rooms not specified");
    m
});

fn type_default(doc_type: DocumentType, field: &str) -> Option<&'static str> {
    match doc_type {
        DocumentType::HouseLease => HOUSE_LEASE_DEFAULTS.get(field).copied(),
        _ => None,
    }
}

/// Resolve the default value for a missing field.
pub fn default_for(doc_type: DocumentType, field: &str) -> String {
    type_default(doc_type, field)
        .or_else(|| GLOBAL_DEFAULTS.get(field).copied())
        .map(str::to_string)
        .unwrap_or_else(|| format!("[{field} not specified]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_specific_default_wins() {
        assert_eq!(
            default_for(DocumentType::HouseLease, "lessor"),
            "Lessor name not specified"
        );
    }

    #[test]
    fn test_global_default_when_no_type_override() {
        assert_eq!(
            default_for(DocumentType::RentalAgreement, "jurisdiction"),
            "Jurisdiction not specified"
        );
        assert_eq!(
            default_for(DocumentType::HouseLease, "jurisdiction"),
            "Jurisdiction not specified"
        );
    }

    #[test]
    fn test_literal_fallback_for_unregistered_field() {
        assert_eq!(
            default_for(DocumentType::LandSaleDeed, "survey_number"),
            "[survey_number not specified]"
        );
    }

    #[test]
    fn test_type_override_scoped_to_its_type() {
        // `start_date` has a house_lease override but no global entry.
        assert_eq!(
            default_for(DocumentType::HouseLease, "start_date"),
            "Start date not specified"
        );
        assert_eq!(
            default_for(DocumentType::RentalAgreement, "start_date"),
            "[start_date not specified]"
        );
    }
}
