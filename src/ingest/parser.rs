//! Strict single-line CSV parser.
//!
//! The input format is a simplified comma-split: no quoting, no embedded
//! commas, no escape syntax. RFC-4180 support is deliberately out of scope;
//! if it is ever needed it belongs in a separate parser, not here.

use crate::error::{ParseError, ParseResult};
use crate::models::Contact;

/// Number of fields every data line must split into.
const FIELD_COUNT: usize = 4;

/// Parse one CSV data line into a validated [`Contact`].
///
/// The line must have the shape `name,email,phone,city` with exactly three
/// commas. Fields are trimmed of surrounding whitespace and must be non-empty
/// afterwards. The email check is deliberately lax (see [`is_likely_email`]).
///
/// This is the strict validation primitive: it fails fast on the first rule
/// violation. The bulk loader catches these failures and keeps going; a caller
/// that wants atomic single-row validation uses this directly.
///
/// # Errors
///
/// Returns [`ParseError`] describing the offending line:
/// - [`ParseError::WrongFieldCount`] if the split does not yield 4 fields
/// - [`ParseError::MissingField`] if any field is empty after trimming
/// - [`ParseError::InvalidEmail`] if the email fails the lax check
///
/// # Example
///
/// ```
/// use contact_book::ingest::parse_line;
///
/// let contact = parse_line("Ada, ada@x.io ,555-1,Paris").unwrap();
/// assert_eq!(contact.name, "Ada");
/// assert_eq!(contact.email, "ada@x.io");
/// ```
pub fn parse_line(line: &str) -> ParseResult<Contact> {
    // split(',') preserves empty fields, so "a,b,c," yields 4 fields
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != FIELD_COUNT {
        return Err(ParseError::WrongFieldCount(line.to_string()));
    }

    let name = parts[0].trim();
    let email = parts[1].trim();
    let phone = parts[2].trim();
    let city = parts[3].trim();

    if name.is_empty() || email.is_empty() || phone.is_empty() || city.is_empty() {
        return Err(ParseError::MissingField(line.to_string()));
    }
    if !is_likely_email(email) {
        return Err(ParseError::InvalidEmail(email.to_string()));
    }

    Ok(Contact::new(name, email, phone, city))
}

/// Lax email check: the first `@` must have at least one character before it
/// and at least one after it, and the address must contain no space.
///
/// Full RFC-5321 compliance is a non-goal; this accepts `a@b` and rejects
/// `@b`, `a@`, `ab`, and `a @b`.
fn is_likely_email(email: &str) -> bool {
    match email.find('@') {
        Some(at) => at > 0 && at < email.len() - 1 && !email.contains(' '),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let contact = parse_line("Ada,ada@x.io,555-1,Paris").unwrap();
        assert_eq!(contact, Contact::new("Ada", "ada@x.io", "555-1", "Paris"));
    }

    #[test]
    fn test_parse_trims_fields() {
        let contact = parse_line("  Ada , ada@x.io ,\t555-1 , Paris ").unwrap();
        assert_eq!(contact, Contact::new("Ada", "ada@x.io", "555-1", "Paris"));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert_eq!(
            parse_line("Ada,ada@x.io,555-1"),
            Err(ParseError::WrongFieldCount("Ada,ada@x.io,555-1".to_string()))
        );
        assert_eq!(
            parse_line("Ada,ada@x.io,555-1,Paris,extra"),
            Err(ParseError::WrongFieldCount(
                "Ada,ada@x.io,555-1,Paris,extra".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_trailing_comma_is_missing_field() {
        // "a,b,c," splits into four fields with an empty city
        assert_eq!(
            parse_line("Ada,ada@x.io,555-1,"),
            Err(ParseError::MissingField("Ada,ada@x.io,555-1,".to_string()))
        );
    }

    #[test]
    fn test_parse_all_empty_fields() {
        // Three commas alone yield four empty fields
        assert_eq!(
            parse_line(",,,"),
            Err(ParseError::MissingField(",,,".to_string()))
        );
    }

    #[test]
    fn test_parse_whitespace_only_field() {
        assert_eq!(
            parse_line("Ada,ada@x.io,   ,Paris"),
            Err(ParseError::MissingField("Ada,ada@x.io,   ,Paris".to_string()))
        );
    }

    #[test]
    fn test_email_validation() {
        assert!(parse_line("A,a@b,1,C").is_ok());
        assert_eq!(
            parse_line("A,@b,1,C"),
            Err(ParseError::InvalidEmail("@b".to_string()))
        );
        assert_eq!(
            parse_line("A,a@,1,C"),
            Err(ParseError::InvalidEmail("a@".to_string()))
        );
        assert_eq!(
            parse_line("A,ab,1,C"),
            Err(ParseError::InvalidEmail("ab".to_string()))
        );
        assert_eq!(
            parse_line("A,a @b,1,C"),
            Err(ParseError::InvalidEmail("a @b".to_string()))
        );
    }

    #[test]
    fn test_is_likely_email() {
        assert!(is_likely_email("a@b"));
        assert!(is_likely_email("user@example.com"));
        assert!(!is_likely_email("@b"));
        assert!(!is_likely_email("a@"));
        assert!(!is_likely_email("ab"));
        assert!(!is_likely_email("a @b"));
        assert!(!is_likely_email(""));
    }

    #[test]
    fn test_round_trip() {
        let contact = parse_line("Ada,ada@x.io,555-1,Paris").unwrap();
        assert_eq!(parse_line(&contact.to_csv_line()).unwrap(), contact);
    }
}
