//! Contact link tiers and shared inline-HTML helpers
//!
//! Tier 1 is phone and email. Tier 2 is LinkedIn, X and the booking page.
//! Absent fields are left out entirely; a tier with nothing in it is an
//! empty string so the style can drop its row.

use url::Url;

use crate::model::{AccentColor, FormData, FormField};
use crate::sanitize::{
    escape_html, linkedin_profile_url, sanitize_phone, sanitize_url, x_profile_url,
};

/// Bullet between items in a row; dark mode recolors it through the class
pub const SEPARATOR: &str =
    r#"<span class="sig-separator" style="margin: 0 6px; color: #CCCCCC;">&bull;</span>"#;

/// Accent-colored anchor. `href` is escaped here, `text` must already be markup-safe.
pub fn link(href: &str, text: &str, accent: &AccentColor) -> String {
    format!(
        r#"<a href="{}" class="sig-link" style="color: {}; text-decoration: none;">{}</a>"#,
        escape_html(href),
        accent,
        text
    )
}

/// Escaped title and department joined by ` | `
pub fn title_line(data: &FormData) -> String {
    [FormField::Title, FormField::Department]
        .into_iter()
        .filter_map(|field| data.get(field))
        .map(|value| escape_html(value.trim()))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Display text for a website link: the host without `www.`
pub fn website_label(url: &str) -> String {
    let host = Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string());
    escape_html(host.strip_prefix("www.").unwrap_or(&host))
}

/// Phone link, if the number has any digits
pub fn phone_link(data: &FormData, accent: &AccentColor) -> Option<String> {
    let phone = data.get(FormField::Phone)?;
    let digits = sanitize_phone(phone);
    if digits.is_empty() {
        return None;
    }
    Some(link(&format!("tel:{digits}"), &escape_html(phone.trim()), accent))
}

/// Email link
pub fn email_link(data: &FormData, accent: &AccentColor) -> Option<String> {
    let email = data.get(FormField::Email)?.trim();
    Some(link(&format!("mailto:{email}"), &escape_html(email), accent))
}

/// LinkedIn profile link, if the value points at a LinkedIn profile
pub fn linkedin_link(data: &FormData, accent: &AccentColor) -> Option<String> {
    let url = linkedin_profile_url(data.get(FormField::Linkedin)?)?;
    Some(link(&url, "LinkedIn", accent))
}

/// X profile link, accepting twitter.com URLs and bare handles
pub fn x_link(data: &FormData, accent: &AccentColor) -> Option<String> {
    let url = x_profile_url(data.get(FormField::Twitter)?)?;
    Some(link(&url, "X", accent))
}

/// Booking page link, if the value is an http(s) URL
pub fn bookings_link(data: &FormData, accent: &AccentColor) -> Option<String> {
    let url = sanitize_url(data.get(FormField::Bookings)?)?;
    Some(link(&url, "Book a Meeting", accent))
}

fn join(links: impl IntoIterator<Item = Option<String>>) -> String {
    links.into_iter().flatten().collect::<Vec<_>>().join(SEPARATOR)
}

/// Phone then email, separated
pub fn tier1_links(data: &FormData, accent: &AccentColor) -> String {
    join([phone_link(data, accent), email_link(data, accent)])
}

/// LinkedIn, X, then the booking page, separated
pub fn tier2_links(data: &FormData, accent: &AccentColor) -> String {
    join([
        linkedin_link(data, accent),
        x_link(data, accent),
        bookings_link(data, accent),
    ])
}
