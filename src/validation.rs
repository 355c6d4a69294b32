//! Format validators used while the form is being filled in
//!
//! The renderer does not call these; it relies on the sanitizers instead.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

/// Why an email prefix was rejected
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmailPrefixError {
    #[error("Email needs at least 2 characters (e.g., js, john.smith)")]
    TooShort,
    #[error("Use only letters, numbers, and dots (e.g., john.smith or jsmith2)")]
    InvalidCharacters,
    #[error("Dots can't be at the start, end, or in a row (e.g., john.smith)")]
    MisplacedDot,
}

/// Why a form field value was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Must use @{domain} domain. Example: john.doe@{domain}")]
    Email { domain: String },
    #[error("Must contain at least 10 digits. Example: +1 (281) 330-8004")]
    Phone,
    #[error("Enter a web address, e.g. https://www.zoho.com")]
    Url,
}

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// Loose `local@domain.tld` check
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(email))
}

/// Email on the organization's domain, e.g. `jane@zohocorp.com`
pub fn is_valid_company_email(email: &str, domain: &str) -> bool {
    is_valid_email(email)
        && email
            .rsplit_once('@')
            .is_some_and(|(_, host)| host.eq_ignore_ascii_case(domain))
}

/// At least ten digits, optionally after a leading `+`
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    digits.len() >= 10 && digits.chars().all(|c| c.is_ascii_digit())
}

/// Parseable web URL, with `https://` assumed when no scheme is given
pub fn is_valid_url(url: &str) -> bool {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return false;
    }
    let lower = trimmed.to_ascii_lowercase();
    let normalized = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed.trim_start_matches('/'))
    };
    Url::parse(&normalized).is_ok_and(|parsed| parsed.host_str().is_some_and(|h| !h.is_empty()))
}

/// Check the part of a company email before the `@`
///
/// Only lowercase ASCII letters, digits and single interior dots are allowed,
/// with a minimum length of two.
pub fn validate_email_prefix(prefix: &str) -> Result<(), EmailPrefixError> {
    if prefix.chars().count() < 2 {
        return Err(EmailPrefixError::TooShort);
    }
    if !prefix
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.')
    {
        return Err(EmailPrefixError::InvalidCharacters);
    }
    if prefix.starts_with('.') || prefix.ends_with('.') || prefix.contains("..") {
        return Err(EmailPrefixError::MisplacedDot);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("jasmine.frank@zohocorp.com"));
        assert!(!is_valid_email("jasmine.frank@zohocorp"));
        assert!(!is_valid_email("jasmine frank@zohocorp.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_company_email() {
        assert!(is_valid_company_email("jf@zohocorp.com", "zohocorp.com"));
        assert!(!is_valid_company_email("jf@gmail.com", "zohocorp.com"));
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("+1 (512) 555-1234"));
        assert!(is_valid_phone("512-555-1234"));
        assert!(!is_valid_phone("555-1234"));
        assert!(!is_valid_phone("1+5125551234"));
    }

    #[test]
    fn test_url() {
        assert!(is_valid_url("https://www.zoho.com"));
        assert!(is_valid_url("zoho.com/crm"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("http://"));
    }

    #[test]
    fn test_email_prefix_accepts() {
        for prefix in ["john.doe", "j.smith", "john123", "john.middle.doe", "js"] {
            assert_eq!(validate_email_prefix(prefix), Ok(()), "{prefix}");
        }
    }

    #[test]
    fn test_email_prefix_rejects() {
        let cases = [
            ("j", EmailPrefixError::TooShort),
            ("", EmailPrefixError::TooShort),
            ("john-doe", EmailPrefixError::InvalidCharacters),
            ("john_doe", EmailPrefixError::InvalidCharacters),
            ("john+tag", EmailPrefixError::InvalidCharacters),
            ("john@doe", EmailPrefixError::InvalidCharacters),
            ("John.Doe", EmailPrefixError::InvalidCharacters),
            (".john", EmailPrefixError::MisplacedDot),
            ("john.", EmailPrefixError::MisplacedDot),
            ("a.", EmailPrefixError::MisplacedDot),
            ("john..doe", EmailPrefixError::MisplacedDot),
        ];
        for (prefix, expected) in cases {
            assert_eq!(validate_email_prefix(prefix), Err(expected), "{prefix}");
        }
    }
}
