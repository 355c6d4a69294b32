//! Paired light/dark logo images
//!
//! Both variants are always emitted. Which one shows is decided by the
//! dark-mode style block, never at render time.

use crate::brand::Brand;
use crate::sanitize::escape_html;

/// Resolved logo asset URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoUrls {
    pub light: String,
    pub dark: String,
}

/// Logo asset URLs for a brand
///
/// The base comes from configuration; a trailing slash on it is tolerated.
pub fn logo_urls(brand: &Brand) -> LogoUrls {
    let base = brand.logo_base_url.trim_end_matches('/');
    LogoUrls {
        light: format!("{}/{}", base, brand.logo_light),
        dark: format!("{}/{}", base, brand.logo_dark),
    }
}

/// Linked light and dark `<img>` pair at the given pixel height
pub fn dual_logos(brand: &Brand, website_url: &str, height: u32) -> String {
    let urls = logo_urls(brand);
    let alt = escape_html(&brand.organization);
    format!(
        r#"<a href="{href}" style="text-decoration: none; display: inline-block;">
    <img src="{light}"
         alt="{alt}"
         class="sig-logo-light"
         style="height: {height}px; display: block; border: 0;"
         height="{height}">
    <img src="{dark}"
         alt="{alt}"
         class="sig-logo-dark"
         style="height: {height}px; display: none; border: 0;"
         height="{height}">
</a>"#,
        href = escape_html(website_url),
        light = escape_html(&urls.light),
        dark = escape_html(&urls.dark),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_urls_default_brand() {
        let urls = logo_urls(&Brand::default());
        assert_eq!(
            urls.light,
            "https://tejasgadhia.github.io/zoho-signature-generator/assets/zoho-logo-light.png"
        );
        assert_eq!(
            urls.dark,
            "https://tejasgadhia.github.io/zoho-signature-generator/assets/zoho-logo-dark.png"
        );
    }

    #[test]
    fn test_logo_urls_relative_base() {
        let mut brand = Brand::default();
        brand.logo_base_url = "./assets/".to_string();
        assert_eq!(logo_urls(&brand).light, "./assets/zoho-logo-light.png");
    }

    #[test]
    fn test_dual_logos_contains_both_variants() {
        let html = dual_logos(&Brand::default(), "https://www.zoho.com/", 32);
        assert!(html.contains(r#"class="sig-logo-light""#));
        assert!(html.contains(r#"class="sig-logo-dark""#));
        assert!(html.contains("height: 32px; display: none;"));
        assert!(html.contains(r#"href="https://www.zoho.com/""#));
        assert_eq!(html.matches("<img").count(), 2);
    }
}
