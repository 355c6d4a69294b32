//! Escaping and URL sanitization
//!
//! Everything user supplied passes through here before it reaches markup.
//! Sanitizers fail closed: a value that cannot be proven safe yields `None`
//! and the caller leaves the link out.

use url::Url;

/// Host used for canonical LinkedIn profile links
pub const LINKEDIN_DOMAIN: &str = "linkedin.com";
/// Host used for canonical X profile links
pub const X_DOMAIN: &str = "x.com";
/// Legacy host still accepted for X profiles
pub const TWITTER_DOMAIN: &str = "twitter.com";

const LINKEDIN_PROFILE_BASE: &str = "https://www.linkedin.com/in/";
const X_PROFILE_BASE: &str = "https://x.com/";

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reduce a phone number to digits and an optional leading `+` for `tel:` links
pub fn sanitize_phone(phone: &str) -> String {
    let mut out = String::with_capacity(phone.len());
    for c in phone.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '+' && out.is_empty() {
            out.push(c);
        }
    }
    if out == "+" {
        out.clear();
    }
    out
}

/// Scheme of an absolute URL, lowercased, if the input declares one
///
/// Whitespace and control characters are ignored first, since browsers drop
/// them when resolving `java\tscript:` style hrefs.
fn explicit_scheme(input: &str) -> Option<String> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let (candidate, after) = compact.split_once(':')?;
    // `host:8080/path` is a port, not a scheme
    let port = after.split(['/', '?', '#']).next().unwrap_or_default();
    if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(candidate.to_ascii_lowercase())
    } else {
        None
    }
}

/// True when the input has no scheme and its first segment is not a host name
fn is_bare_path(input: &str) -> bool {
    if explicit_scheme(input).is_some() {
        return false;
    }
    let first = input
        .trim_start_matches('/')
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    !first.contains('.')
}

/// Parse a web URL, adding `https://` when no scheme is present
fn parse_web_url(input: &str) -> Option<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let candidate = match explicit_scheme(trimmed).as_deref() {
        Some("http" | "https") => trimmed.to_string(),
        Some(_) => return None,
        None => format!("https://{}", trimmed.trim_start_matches('/')),
    };
    let url = Url::parse(&candidate).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.host_str().filter(|host| !host.is_empty())?;
    Some(url)
}

/// Normalize a web URL, rejecting anything that is not http(s)
///
/// `javascript:`, `data:` and every other scheme yield `None`. Inputs
/// without a scheme are treated as https.
pub fn sanitize_url(input: &str) -> Option<String> {
    parse_web_url(input).map(String::from)
}

/// Validate a profile URL against a platform domain and return its path
///
/// Accepts full URLs on `domain` or any of its subdomains, and bare paths
/// such as `in/jane` or `jane`. The returned path has no leading or trailing
/// slash and is percent-encoded.
pub fn sanitize_social_url(input: &str, domain: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let url = if is_bare_path(trimmed) {
        Url::parse(&format!("https://{domain}/{}", trimmed.trim_start_matches('/'))).ok()?
    } else {
        parse_web_url(trimmed)?
    };

    let host = url.host_str()?.to_ascii_lowercase();
    let domain = domain.to_ascii_lowercase();
    if host != domain && !host.ends_with(&format!(".{domain}")) {
        return None;
    }

    let path = url.path().trim_matches('/');
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}

/// Recover a bare LinkedIn username from a pasted URL or handle
pub fn linkedin_username(input: &str) -> String {
    let mut rest = input.trim();
    for scheme in ["https://", "http://"] {
        if rest
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        {
            rest = &rest[scheme.len()..];
            break;
        }
    }
    let mut from_url = false;
    match rest.split_once('/') {
        Some((host, path)) if host.to_ascii_lowercase().ends_with(LINKEDIN_DOMAIN) => {
            rest = path;
            from_url = true;
        }
        None if rest.to_ascii_lowercase().ends_with(LINKEDIN_DOMAIN) => return String::new(),
        _ => {}
    }

    // Only `/in/<user>` is a profile; company pages and the like are not
    let path = rest.split(['?', '#']).next().unwrap_or_default().trim_matches('/');
    let user = match path.strip_prefix("in/") {
        Some(user) => user,
        None if from_url || path.contains('/') => return String::new(),
        None => path,
    };

    user.split('/')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '%'))
        .collect()
}

/// Turn a pasted LinkedIn URL or username into `https://www.linkedin.com/in/<user>`
///
/// Returns an empty string when no username can be recovered.
pub fn clean_linkedin_url(input: &str) -> String {
    let username = linkedin_username(input);
    if username.is_empty() {
        String::new()
    } else {
        format!("{LINKEDIN_PROFILE_BASE}{username}")
    }
}

/// Canonical LinkedIn profile link for a form value, if it is safe
pub fn linkedin_profile_url(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let username = if is_bare_path(value) {
        linkedin_username(value)
    } else {
        let path = sanitize_social_url(value, LINKEDIN_DOMAIN)?;
        if !path.starts_with("in/") {
            return None;
        }
        linkedin_username(&path)
    };
    if username.is_empty() {
        None
    } else {
        Some(format!("{LINKEDIN_PROFILE_BASE}{username}"))
    }
}

/// Canonical X profile link for a form value, accepting twitter.com and bare handles
pub fn x_profile_url(value: &str) -> Option<String> {
    let handle = value.trim().trim_start_matches('@');
    let path = sanitize_social_url(handle, X_DOMAIN)
        .or_else(|| sanitize_social_url(handle, TWITTER_DOMAIN))?;
    Some(format!("{X_PROFILE_BASE}{path}"))
}

/// Strip an X or Twitter URL prefix, leaving the handle
pub fn x_handle(input: &str) -> &str {
    let mut rest = input.trim();
    for prefix in ["https://", "http://"] {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped;
            break;
        }
    }
    rest = rest.strip_prefix("www.").unwrap_or(rest);
    for host in ["x.com/", "twitter.com/"] {
        if let Some(stripped) = rest.strip_prefix(host) {
            rest = stripped;
            break;
        }
    }
    rest.trim_start_matches('@')
}

/// Prefix `https://` when the value has no http(s) scheme
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed.trim_start_matches('/'))
    }
}

/// Booking page id from a full bookings URL
///
/// Hash-routed URLs (`.../#/jane`) use the route; others use the last path segment.
pub fn extract_bookings_slug(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if let Some((_, route)) = trimmed.split_once("#/") {
        let slug = route.trim_matches('/');
        return (!slug.is_empty()).then(|| slug.to_string());
    }
    let url = parse_web_url(trimmed)?;
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
}

/// Website link with campaign parameters identifying the sender
///
/// Returns the base unchanged when the prefix is empty or the base is not a
/// web URL.
pub fn tracked_website_url(base: &str, prefix: &str) -> String {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return base.to_string();
    }
    let Some(mut url) = parse_web_url(base) else {
        return base.to_string();
    };
    url.query_pairs_mut()
        .append_pair("utm_source", "email-signature")
        .append_pair("utm_medium", "email")
        .append_pair("utm_content", prefix);
    url.into()
}
