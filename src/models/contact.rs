//! Contact model representing one entry in the address book.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// Contacts are immutable once constructed: the parser is the only producer,
/// and every instance that reaches user code satisfies the load invariants
/// (all four fields non-empty and already trimmed, email passed the lax check,
/// no field contains the `,` separator).
///
/// Equality and hashing are structural over all four fields, so contacts can
/// be deduplicated or used as map keys by callers that need to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Contact {
    /// Full name of the contact
    pub name: String,

    /// Email address (lax-validated: one `@` with non-empty sides, no space)
    pub email: String,

    /// Phone number, kept verbatim (no normalization)
    pub phone: String,

    /// City of residence
    pub city: String,
}

impl Contact {
    /// Create a new contact.
    ///
    /// This does not validate; use [`crate::ingest::parse_line`] to construct
    /// a contact from untrusted input.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            city: city.into(),
        }
    }

    /// Render the contact as a simplified CSV data line.
    ///
    /// Inverse of [`crate::ingest::parse_line`] as long as no field contains
    /// a comma, which the parser guarantees for contacts it produced.
    pub fn to_csv_line(&self) -> String {
        format!("{},{},{},{}", self.name, self.email, self.phone, self.city)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.name, self.email, self.phone, self.city
        )
    }
}
