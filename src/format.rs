//! Text formatting helpers for form input
//!
//! Pure string transformations applied while the user types: smart title
//! casing, email prefix derivation, phone formatting and HTML minification.

use std::sync::OnceLock;

use regex::Regex;

/// Acronyms restored to their canonical casing after title casing
pub const PRESERVED_ACRONYMS: &[&str] = &[
    "VP", "SVP", "EVP", "AVP", "CEO", "CTO", "CFO", "COO", "CMO", "CIO", "CISO", "CPO", "CRO",
    "HR", "IT", "QA", "UX", "UI", "PR", "R&D", "B2B", "B2C", "SaaS", "API", "CRM", "ERP", "AI",
    "ML", "iOS", "macOS", "APAC", "EMEA", "LATAM", "US", "USA", "UK", "EU", "II", "III", "IV",
];

/// Words kept lowercase unless they start the string
pub const LOWERCASE_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "nor", "for", "so", "yet", "at", "by", "in", "of", "on",
    "to", "up", "as", "via", "with", "from", "into", "per",
];

fn acronym_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        PRESERVED_ACRONYMS
            .iter()
            .filter_map(|acronym| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(acronym));
                Regex::new(&pattern).ok().map(|re| (re, *acronym))
            })
            .collect()
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-case a string, keeping glue words lowercase and acronyms intact
///
/// ```rust
/// use signature_studio::format::to_smart_title_case;
///
/// assert_eq!(to_smart_title_case("director of marketing"), "Director of Marketing");
/// assert_eq!(to_smart_title_case("vp of ios engineering"), "VP of iOS Engineering");
/// ```
pub fn to_smart_title_case(input: &str) -> String {
    let lowered = input.to_lowercase();
    let titled = lowered
        .split_whitespace()
        .enumerate()
        .map(|(index, word)| {
            if index > 0 && LOWERCASE_WORDS.contains(&word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    acronym_patterns()
        .iter()
        .fold(titled, |text, (pattern, acronym)| {
            pattern.replace_all(&text, *acronym).into_owned()
        })
}

/// Derive an email prefix (`first.last`) from a full name
///
/// Non-letters are stripped from the chosen tokens. Middle names and
/// suffixes are ignored because only the first and last tokens are used.
pub fn generate_email_prefix(full_name: &str) -> String {
    let lowered = full_name.trim().to_lowercase();
    let parts: Vec<&str> = lowered.split_whitespace().collect();
    let letters = |token: &str| -> String { token.chars().filter(char::is_ascii_lowercase).collect() };

    match parts.as_slice() {
        [] => String::new(),
        [only] => letters(only),
        [first, .., last] => format!("{}.{}", letters(first), letters(last)),
    }
}

/// Keep only characters that can appear in a typed phone number
pub fn filter_phone_digits(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '(' | ')' | '-' | '.'))
        .collect()
}

/// Format North American numbers; anything else is returned trimmed
pub fn format_phone_number(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        11 if digits.starts_with('1') => {
            format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
        }
        _ => input.trim().to_string(),
    }
}

/// Remove whitespace between tags and collapse runs of whitespace
pub fn minify_html(html: &str) -> String {
    static BETWEEN_TAGS: OnceLock<Option<Regex>> = OnceLock::new();
    static RUNS: OnceLock<Option<Regex>> = OnceLock::new();

    let between = BETWEEN_TAGS.get_or_init(|| Regex::new(r">\s+<").ok());
    let runs = RUNS.get_or_init(|| Regex::new(r"\s{2,}").ok());

    let mut out = html.trim().to_string();
    if let Some(re) = between {
        out = re.replace_all(&out, "><").into_owned();
    }
    if let Some(re) = runs {
        out = re.replace_all(&out, " ").into_owned();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_glue_words() {
        assert_eq!(to_smart_title_case("director of marketing"), "Director of Marketing");
        assert_eq!(to_smart_title_case("head of the design team"), "Head of the Design Team");
        assert_eq!(to_smart_title_case("the office"), "The Office");
    }

    #[test]
    fn test_title_case_acronyms_anywhere() {
        assert_eq!(to_smart_title_case("vp"), "VP");
        assert_eq!(to_smart_title_case("senior vp of sales"), "Senior VP of Sales");
        assert_eq!(to_smart_title_case("senior b2b account manager"), "Senior B2B Account Manager");
        assert_eq!(to_smart_title_case("SAAS PLATFORM LEAD"), "SaaS Platform Lead");
        assert_eq!(to_smart_title_case("vp of r&d"), "VP of R&D");
    }

    #[test]
    fn test_title_case_collapses_whitespace() {
        assert_eq!(to_smart_title_case("  product   manager "), "Product Manager");
        assert_eq!(to_smart_title_case(""), "");
    }

    #[test]
    fn test_email_prefix() {
        assert_eq!(generate_email_prefix("John Smith"), "john.smith");
        assert_eq!(generate_email_prefix("Jane Doe III"), "jane.iii");
        assert_eq!(generate_email_prefix("Alice"), "alice");
        assert_eq!(generate_email_prefix(""), "");
        assert_eq!(generate_email_prefix("  Mary-Jane   O'Neil "), "maryjane.oneil");
    }

    #[test]
    fn test_filter_phone_digits() {
        assert_eq!(filter_phone_digits("+1 (512) abc 555-1234"), "+1 (512)  555-1234");
    }

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number("5125551234"), "(512) 555-1234");
        assert_eq!(format_phone_number("1-512-555-1234"), "+1 (512) 555-1234");
        assert_eq!(format_phone_number(" +33 1 23 45 67 89 "), "+33 1 23 45 67 89");
    }

    #[test]
    fn test_minify_html() {
        let html = "<table>\n    <tr>\n        <td>Jane   Doe</td>\n    </tr>\n</table>\n";
        assert_eq!(minify_html(html), "<table><tr><td>Jane Doe</td></tr></table>");
    }
}
