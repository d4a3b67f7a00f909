//! Read-only query operations over a contact sequence.
//!
//! Every operation here is a pure function: it borrows the input slice,
//! never mutates it, and returns an owned result the caller is free to
//! consume. All operations are total for well-formed contact sequences and
//! an empty input yields the empty result of the output type.

use crate::models::Contact;
use std::collections::{HashMap, HashSet};

/// Contacts whose name contains `query` as a substring, case-insensitively.
///
/// Case folding is ASCII lowercase (locale-neutral). Results keep input order.
pub fn search_by_name(contacts: &[Contact], query: &str) -> Vec<Contact> {
    let query = query.to_ascii_lowercase();
    contacts
        .iter()
        .filter(|c| c.name.to_ascii_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Contacts whose city equals `city` exactly.
///
/// The comparison is case-sensitive: `"paris"` does not match `"Paris"`.
/// Callers that want folded matching fold both sides themselves.
pub fn filter_by_city(contacts: &[Contact], city: &str) -> Vec<Contact> {
    contacts.iter().filter(|c| c.city == city).cloned().collect()
}

/// Contacts whose phone number starts with `prefix`, compared verbatim.
///
/// No normalization is applied: `"+1"` matches `"+1-555"` but `"1"` does not.
pub fn filter_by_phone_prefix(contacts: &[Contact], prefix: &str) -> Vec<Contact> {
    contacts
        .iter()
        .filter(|c| c.phone.starts_with(prefix))
        .cloned()
        .collect()
}

/// Distinct city names in first-appearance order.
///
/// Deduplication is by exact string equality.
pub fn unique_cities(contacts: &[Contact]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cities = Vec::new();
    for contact in contacts {
        if seen.insert(contact.city.as_str()) {
            cities.push(contact.city.clone());
        }
    }
    cities
}

/// A new sequence sorted by name under ASCII lowercasing.
///
/// The sort is stable: contacts whose folded names compare equal keep their
/// input order. The input slice is not mutated.
pub fn sorted_by_name(contacts: &[Contact]) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by_key(|c| c.name.to_ascii_lowercase());
    sorted
}

/// Count of contacts per city, keyed by the exact city string.
///
/// Iteration order over the returned map is unspecified.
pub fn group_count_by_city(contacts: &[Contact]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for contact in contacts {
        *counts.entry(contact.city.clone()).or_insert(0) += 1;
    }
    counts
}
