//! Format checks for free-text fields
//!
//! The `validator` derive covers typed payload checks (lengths, ranges,
//! emails, URLs); this module covers the Brazilian formats those derives
//! don't know about, for use from `ensure_valid` implementations and
//! patch validation.

use regex::Regex;
use std::sync::OnceLock;

/// Field formats accepted by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `user@example.com`
    Email,
    /// Masked landline or mobile: `(99) 9999-9999` or `(99) 99999-9999`
    PhoneMask,
    /// Bare WhatsApp number: `55` + DDD + 8–9 digits
    WhatsApp,
    /// `http://` or `https://` URL
    Url,
}

impl Format {
    /// Check a value against this format
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Format::Email => Self::email_regex().is_match(value),
            Format::PhoneMask => Self::phone_regex().is_match(value),
            Format::WhatsApp => Self::whatsapp_regex().is_match(value),
            Format::Url => Self::url_regex().is_match(value),
        }
    }

    fn email_regex() -> &'static Regex {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        })
    }

    fn phone_regex() -> &'static Regex {
        static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
        PHONE_REGEX.get_or_init(|| Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").unwrap())
    }

    fn whatsapp_regex() -> &'static Regex {
        static WHATSAPP_REGEX: OnceLock<Regex> = OnceLock::new();
        WHATSAPP_REGEX.get_or_init(|| Regex::new(r"^55\d{2}\d{8,9}$").unwrap())
    }

    fn url_regex() -> &'static Regex {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_format() {
        assert!(Format::Email.is_match("cliente@example.com"));
        assert!(Format::Email.is_match("user.name+tag@example.co.uk"));
        assert!(!Format::Email.is_match("not-an-email"));
        assert!(!Format::Email.is_match("@example.com"));
    }

    #[test]
    fn test_phone_mask_format() {
        assert!(Format::PhoneMask.is_match("(11) 99999-1234"));
        assert!(Format::PhoneMask.is_match("(21) 3333-4444"));
        assert!(!Format::PhoneMask.is_match("11999991234"));
        assert!(!Format::PhoneMask.is_match("(11)99999-1234"));
    }

    #[test]
    fn test_whatsapp_format() {
        assert!(Format::WhatsApp.is_match("5511999991234"));
        assert!(Format::WhatsApp.is_match("551133334444"));
        assert!(!Format::WhatsApp.is_match("11999991234"));
        assert!(!Format::WhatsApp.is_match("55 11 99999-1234"));
    }

    #[test]
    fn test_url_format() {
        assert!(Format::Url.is_match("https://example.com/video"));
        assert!(Format::Url.is_match("http://cdn.test/img.jpg?w=800"));
        assert!(!Format::Url.is_match("not a url"));
    }
}
