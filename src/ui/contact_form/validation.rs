// SPDX-License-Identifier: MPL-2.0
//! Field validation rules for the contact form.

use super::Field;
use regex::Regex;
use std::sync::LazyLock;

/// One `@`, at least one `.` after it, no whitespace anywhere.
///
/// A permissive heuristic rather than RFC 5322 validation. Browsers count
/// U+FEFF as whitespace, so it is excluded alongside `\s`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("valid email pattern")
});

fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validates a single field, returning the message to show beneath it.
#[must_use]
pub fn validate(field: Field, value: &str) -> Option<&'static str> {
    let valid = match field {
        Field::Email => is_valid_email(value),
        Field::Name | Field::Phone | Field::Message => {
            !value.trim_matches(is_blank_char).is_empty()
        }
    };
    if valid {
        None
    } else {
        Some(field.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for value in ["a@b", "a", "a@@b.co", "", "a b@c.de", "@b.co", "a@.co ", "a@b."] {
            assert!(!is_valid_email(value), "{value:?} should be rejected");
        }
    }

    #[test]
    fn text_fields_require_non_blank_values() {
        assert_eq!(validate(Field::Name, "   "), Some("Please enter your name"));
        assert_eq!(validate(Field::Name, " Ana "), None);
        assert_eq!(validate(Field::Phone, ""), Some("Please enter your phone number"));
        assert_eq!(validate(Field::Message, "\n\t"), Some("Please enter your message"));
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        assert_eq!(validate(Field::Name, "\u{feff}"), Some("Please enter your name"));
        assert_eq!(validate(Field::Message, " \u{feff}\n"), Some("Please enter your message"));
        assert_eq!(validate(Field::Name, "\u{feff}Ana"), None);
        assert!(!is_valid_email("a\u{feff}@b.co"));
    }

    #[test]
    fn email_is_not_trimmed_before_matching() {
        assert_eq!(
            validate(Field::Email, " x@y.com"),
            Some("Please enter a valid email address")
        );
        assert_eq!(validate(Field::Email, "x@y.com"), None);
    }
}
