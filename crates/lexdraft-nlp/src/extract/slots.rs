//! Ordered slot filling for extracted person and place mentions.
//!
//! Each mention goes to the first not-yet-filled slot in a fixed priority
//! list, replacing the original's chain of `if field not in entities`
//! checks with a single routine over an explicit order.

use lexdraft_core::DataMap;

/// Person role slots, in assignment priority order.
pub const PERSON_SLOTS: &[&str] = &[
    "landlord", "tenant", "seller", "buyer", "principal", "attorney", "lessor", "lessee",
];

/// Place slots, in assignment priority order. Party addresses are tried
/// before the property address and the generic catch-all.
pub const PLACE_SLOTS: &[&str] = &[
    "landlord_address",
    "tenant_address",
    "seller_address",
    "buyer_address",
    "principal_address",
    "attorney_address",
    "lessor_address",
    "lessee_address",
    "property_address",
    "address",
];

/// Assign `value` to the first slot not already present in `entities`.
/// Returns false when every slot is taken and the value is dropped.
pub fn fill_first_open_slot(entities: &mut DataMap, slots: &[&str], value: &str) -> bool {
    for slot in slots {
        if !entities.contains_key(*slot) {
            entities.insert(slot.to_string(), value.to_string());
            return true;
        }
    }
    false
}
