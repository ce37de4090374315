//! Document type registry — classification keywords, required fields, and
//! template file names for each supported legal document type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the fixed set of legal template categories.
///
/// Declaration order matters: classification ties are broken by the first
/// declared type, and `DocumentType::ALL` iterates in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    RentalAgreement,
    LandSaleDeed,
    PowerOfAttorney,
    HouseLease,
}

/// Static specification of a document type: how to recognize it in free
/// text, which fields it needs, and which template file renders it.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentTypeSpec {
    pub doc_type: DocumentType,
    /// Keywords counted by substring containment during classification.
    pub keywords: &'static [&'static str],
    /// Fields a complete document of this type needs. Always a subset of
    /// the base template's variable set (checked by tests at authoring
    /// time, not per request).
    pub required_fields: &'static [&'static str],
    /// Template file name, resolved under the template directory (base
    /// language at the root, localized copies under `<lang>/`).
    pub template_file: &'static str,
}

/// The full registry, in declaration order.
pub const SPECS: &[DocumentTypeSpec] = &[
    DocumentTypeSpec {
        doc_type: DocumentType::RentalAgreement,
        keywords: &["rental", "rent", "lease", "tenant", "landlord", "monthly"],
        required_fields: &[
            "landlord",
            "landlord_address",
            "tenant",
            "tenant_address",
            "property_address",
            "rent_amount",
            "start_date",
            "duration",
        ],
        template_file: "rental_agreement_template.txt",
    },
    DocumentTypeSpec {
        doc_type: DocumentType::LandSaleDeed,
        keywords: &["sale", "deed", "property", "buyer", "seller", "purchase"],
        required_fields: &[
            "seller",
            "seller_address",
            "buyer",
            "buyer_address",
            "property_address",
            "sale_amount",
        ],
        template_file: "land_sale_deed_template.txt",
    },
    DocumentTypeSpec {
        doc_type: DocumentType::PowerOfAttorney,
        keywords: &["power", "attorney", "delegate", "authority", "behalf"],
        required_fields: &[
            "principal",
            "principal_address",
            "attorney",
            "attorney_address",
            "matter_description",
            "effective_date",
            "expiry_date",
        ],
        template_file: "power_of_attorney_template.txt",
    },
    DocumentTypeSpec {
        doc_type: DocumentType::HouseLease,
        keywords: &["house", "lease", "lessor", "lessee", "property"],
        required_fields: &[
            "lessor",
            "lessor_age",
            "lessor_father",
            "lessor_address",
            "lessor_city",
            "lessor_pincode",
            "lessee",
            "lessee_age",
            "lessee_father",
            "lessee_address",
            "lessee_city",
            "lessee_pincode",
            "property_address",
            "property_city",
            "property_pincode",
            "lease_period",
            "start_date",
            "end_date",
            "lease_amount",
            "lease_amount_words",
            "rent_due_date",
            "security_deposit",
            "security_deposit_words",
            "notice_period",
            "number_of_rooms",
        ],
        template_file: "house_lease_template.txt",
    },
];

impl DocumentType {
    /// All document types, in declaration (tie-break) order.
    pub const ALL: &'static [DocumentType] = &[
        DocumentType::RentalAgreement,
        DocumentType::LandSaleDeed,
        DocumentType::PowerOfAttorney,
        DocumentType::HouseLease,
    ];

    /// Stable string identifier (`rental_agreement`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::RentalAgreement => "rental_agreement",
            DocumentType::LandSaleDeed => "land_sale_deed",
            DocumentType::PowerOfAttorney => "power_of_attorney",
            DocumentType::HouseLease => "house_lease",
        }
    }

    /// Human-readable title ("Rental Agreement", ...).
    pub fn title(&self) -> &'static str {
        match self {
            DocumentType::RentalAgreement => "Rental Agreement",
            DocumentType::LandSaleDeed => "Land Sale Deed",
            DocumentType::PowerOfAttorney => "Power of Attorney",
            DocumentType::HouseLease => "House Lease",
        }
    }

    /// The static spec for this type.
    pub fn spec(&self) -> &'static DocumentTypeSpec {
        // SPECS is declared in the same order as the enum.
        &SPECS[*self as usize]
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rental_agreement" => Ok(DocumentType::RentalAgreement),
            "land_sale_deed" => Ok(DocumentType::LandSaleDeed),
            "power_of_attorney" => Ok(DocumentType::PowerOfAttorney),
            "house_lease" => Ok(DocumentType::HouseLease),
            other => Err(Error::UnknownDocumentType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lookup_matches_enum_order() {
        for dt in DocumentType::ALL {
            assert_eq!(dt.spec().doc_type, *dt);
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        for dt in DocumentType::ALL {
            assert_eq!(dt.as_str().parse::<DocumentType>().unwrap(), *dt);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "marriage_certificate".parse::<DocumentType>().unwrap_err();
        assert!(matches!(err, Error::UnknownDocumentType(s) if s == "marriage_certificate"));
    }

    #[test]
    fn test_serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&DocumentType::LandSaleDeed).unwrap();
        assert_eq!(json, "\"land_sale_deed\"");
    }
}
