//! Field validators shared by the domain entities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9_\-\.]+)@([a-zA-Z0-9_\-\.]+)\.([a-zA-Z]{2,5})$")
        .expect("email pattern is valid")
});

// Unanchored: a run of three letters anywhere in the value is enough.
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z]{3,}").expect("name pattern is valid"));

/// Check if a string is not empty
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if an email address is well formed
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check that a name contains at least three consecutive ASCII letters
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Check that a value holds at least `min` characters
pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Check that a gender value is one of the accepted ones (case-insensitive)
pub fn is_valid_gender(gender: &str) -> bool {
    matches!(gender.to_ascii_lowercase().as_str(), "male" | "female")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last-1@mail.example.co"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b.toolongtld"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("Ann"));
        assert!(is_valid_name("Jo-Ann"));
        assert!(!is_valid_name("Al"));
        assert!(!is_valid_name("A1b2"));
    }

    #[test]
    fn test_length_and_emptiness() {
        assert!(has_min_chars("123456", 6));
        assert!(!has_min_chars("12345", 6));
        assert!(has_min_chars("ééééé é", 6));
        assert!(not_empty(" x "));
        assert!(!not_empty("   "));
    }

    #[test]
    fn test_gender_validation() {
        assert!(is_valid_gender("male"));
        assert!(is_valid_gender("FEMALE"));
        assert!(!is_valid_gender("other"));
    }
}
