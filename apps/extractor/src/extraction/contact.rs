//! Pattern-based contact extractors. Both keep only the first match in
//! document order and return an empty string when nothing matches.

use std::sync::LazyLock;

use regex::Regex;

/// Returns the first email-like substring, or an empty string.
pub fn extract_email(text: &str) -> String {
    static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
    });

    first_match(&EMAIL_RE, text)
}

/// Returns the first phone-like substring verbatim (separators untouched), or an empty string.
pub fn extract_phone(text: &str) -> String {
    // optional +CC, optional separator, 3 digits (optionally bracketed), 3 digits, 4 digits
    static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(\+?\d{1,3})?\s?[\(\.\-]?\d{3}[\)\.\-]?\s?\d{3}[\-\.]?\d{4}")
            .expect("valid regex")
    });

    first_match(&PHONE_RE, text)
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_found_after_label() {
        assert_eq!(
            extract_email("Contact: jane.doe@example.com"),
            "jane.doe@example.com"
        );
    }

    #[test]
    fn test_email_first_match_wins() {
        let text = "Personal: a.b+cv@mail.example.org\nWork: jane@corp.io";
        assert_eq!(extract_email(text), "a.b+cv@mail.example.org");
    }

    #[test]
    fn test_email_requires_two_letter_tld() {
        assert_eq!(extract_email("reach me at user@host.c"), "");
    }

    #[test]
    fn test_email_absent_is_empty_string() {
        assert_eq!(extract_email("No contact details here @ all"), "");
    }

    #[test]
    fn test_phone_with_country_code_verbatim() {
        assert_eq!(extract_phone("Call +1 555-123-4567"), "+1 555-123-4567");
    }

    #[test]
    fn test_phone_with_parentheses() {
        assert_eq!(extract_phone("Tel:(555) 123-4567 (mobile)"), "(555) 123-4567");
    }

    #[test]
    fn test_phone_dotted_separators_not_normalized() {
        assert_eq!(extract_phone("555.123.4567"), "555.123.4567");
    }

    #[test]
    fn test_phone_unseparated_digits() {
        assert_eq!(extract_phone("Phone:5551234567"), "5551234567");
    }

    #[test]
    fn test_phone_first_match_wins() {
        let text = "Home:555-000-1111\nOffice:555-222-3333";
        assert_eq!(extract_phone(text), "555-000-1111");
    }

    #[test]
    fn test_phone_keeps_leading_whitespace_separator() {
        // the optional separator may sit before the first digit group
        assert_eq!(extract_phone("Phone 555-123-4567"), " 555-123-4567");
    }

    #[test]
    fn test_phone_absent_is_empty_string() {
        assert_eq!(extract_phone("Graduated 2019, GPA 3.8"), "");
    }
}
