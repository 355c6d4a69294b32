//! Organization branding loaded from TOML
//!
//! A brand file supplies everything organization-specific that ends up in a
//! signature: home page, logo assets, company social profiles, the email
//! domain and named accent presets. Keys missing from a file fall back to
//! the embedded default brand.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{AccentColor, SocialChannel};

/// Errors that can occur when loading or parsing a brand file
#[derive(Error, Debug)]
pub enum BrandError {
    #[error("Failed to read brand file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse brand TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid accent preset '{name}': {source}")]
    InvalidAccent {
        name: String,
        source: crate::model::ColorError,
    },
}

/// Organization settings used by the renderer and the form state
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    /// Optional name for the brand file
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Organization name, used as logo alt text
    pub organization: String,
    /// Website used when the form leaves it empty
    pub home_url: String,
    /// Base URL (absolute or relative) of the logo assets
    pub logo_base_url: String,
    pub logo_light: String,
    pub logo_dark: String,
    /// Domain appended to the email prefix
    pub email_domain: String,
    /// Booking page id is appended to this
    pub bookings_base_url: String,
    pub default_accent: AccentColor,
    /// Company profile URL per channel id
    pub social: HashMap<String, String>,
    /// Named accent presets
    pub accents: HashMap<String, AccentColor>,
}

/// TOML structure for deserializing brand files
#[derive(Deserialize)]
struct TomlBrand {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    brand: TomlBrandSection,
    #[serde(default)]
    social: HashMap<String, String>,
    #[serde(default)]
    accents: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize, Default)]
struct TomlBrandSection {
    organization: Option<String>,
    home_url: Option<String>,
    logo_base_url: Option<String>,
    logo_light: Option<String>,
    logo_dark: Option<String>,
    email_domain: Option<String>,
    bookings_base_url: Option<String>,
    default_accent: Option<String>,
}

/// Default brand
const DEFAULT_BRAND: &str = r##"
[metadata]
name = "Zoho"
description = "Zoho corporate email signature"

[brand]
organization = "Zoho"
home_url = "https://www.zoho.com"
logo_base_url = "https://tejasgadhia.github.io/zoho-signature-generator/assets"
logo_light = "zoho-logo-light.png"
logo_dark = "zoho-logo-dark.png"
email_domain = "zohocorp.com"
bookings_base_url = "https://bookings.zohocorp.com/#/"
default_accent = "#E42527"

[social]
twitter = "https://x.com/Zoho"
linkedin = "https://www.linkedin.com/company/zoho"
facebook = "https://www.facebook.com/zoho"
instagram = "https://www.instagram.com/zoho/"

[accents]
red = "#E42527"
green = "#089949"
blue = "#226DB4"
yellow = "#F9B21D"
"##;

/// Builtin values used when even the default document lacks a key
fn builtin(section: &TomlBrandSection) -> TomlBrandSection {
    TomlBrandSection {
        organization: section.organization.clone().or(Some("Zoho".into())),
        home_url: section.home_url.clone().or(Some("https://www.zoho.com".into())),
        logo_base_url: section.logo_base_url.clone().or(Some("./assets".into())),
        logo_light: section.logo_light.clone().or(Some("zoho-logo-light.png".into())),
        logo_dark: section.logo_dark.clone().or(Some("zoho-logo-dark.png".into())),
        email_domain: section.email_domain.clone().or(Some("zohocorp.com".into())),
        bookings_base_url: section
            .bookings_base_url
            .clone()
            .or(Some("https://bookings.zohocorp.com/#/".into())),
        default_accent: section.default_accent.clone(),
    }
}

impl Brand {
    /// Load a brand from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, BrandError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Load a brand from a TOML string, filling gaps from the default brand
    pub fn parse_toml(content: &str) -> Result<Self, BrandError> {
        let parsed: TomlBrand = toml::from_str(content)?;
        let fallback: TomlBrand = toml::from_str(DEFAULT_BRAND)?;
        Self::merge(parsed, fallback)
    }

    fn merge(parsed: TomlBrand, fallback: TomlBrand) -> Result<Self, BrandError> {
        let base = builtin(&fallback.brand);
        let section = parsed.brand;
        let pick = |own: Option<String>, default: Option<String>| own.or(default).unwrap_or_default();

        let default_accent = match section.default_accent.or(base.default_accent) {
            Some(value) => AccentColor::parse(&value).map_err(|source| BrandError::InvalidAccent {
                name: "default_accent".to_string(),
                source,
            })?,
            None => AccentColor::default(),
        };

        let mut social = fallback.social;
        social.extend(parsed.social);

        let mut accents = HashMap::new();
        for (name, value) in fallback.accents.into_iter().chain(parsed.accents) {
            let color = AccentColor::parse(&value)
                .map_err(|source| BrandError::InvalidAccent { name: name.clone(), source })?;
            accents.insert(name, color);
        }

        Ok(Brand {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            organization: pick(section.organization, base.organization),
            home_url: pick(section.home_url, base.home_url),
            logo_base_url: pick(section.logo_base_url, base.logo_base_url),
            logo_light: pick(section.logo_light, base.logo_light),
            logo_dark: pick(section.logo_dark, base.logo_dark),
            email_domain: pick(section.email_domain, base.email_domain),
            bookings_base_url: pick(section.bookings_base_url, base.bookings_base_url),
            default_accent,
            social,
            accents,
        })
    }

    /// Company profile URL for a social channel
    ///
    /// Returns None if the channel is not configured.
    pub fn profile_url(&self, channel: SocialChannel) -> Option<&str> {
        self.social.get(channel.id()).map(|s| s.as_str())
    }

    /// Look up a named accent preset
    pub fn accent(&self, name: &str) -> Option<&AccentColor> {
        self.accents.get(&name.trim().to_ascii_lowercase())
    }

    /// Resolve a CLI/user accent value: a preset name or a hex color
    ///
    /// Falls back to the brand default when neither matches.
    pub fn resolve_accent(&self, value: &str) -> AccentColor {
        if let Some(preset) = self.accent(value) {
            return preset.clone();
        }
        AccentColor::parse(value).unwrap_or_else(|_| self.default_accent.clone())
    }
}

impl Default for Brand {
    fn default() -> Self {
        Self::parse_toml("").unwrap_or_else(|_| Brand {
            name: None,
            description: None,
            organization: "Zoho".to_string(),
            home_url: "https://www.zoho.com".to_string(),
            logo_base_url: "./assets".to_string(),
            logo_light: "zoho-logo-light.png".to_string(),
            logo_dark: "zoho-logo-dark.png".to_string(),
            email_domain: "zohocorp.com".to_string(),
            bookings_base_url: "https://bookings.zohocorp.com/#/".to_string(),
            default_accent: AccentColor::default(),
            social: HashMap::new(),
            accents: HashMap::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brand() {
        let brand = Brand::default();
        assert_eq!(brand.organization, "Zoho");
        assert_eq!(brand.home_url, "https://www.zoho.com");
        assert_eq!(
            brand.logo_base_url,
            "https://tejasgadhia.github.io/zoho-signature-generator/assets"
        );
        assert_eq!(brand.email_domain, "zohocorp.com");
        assert_eq!(brand.default_accent.as_str(), "#E42527");
    }

    #[test]
    fn test_default_profiles_and_presets() {
        let brand = Brand::default();
        assert_eq!(brand.profile_url(SocialChannel::Twitter), Some("https://x.com/Zoho"));
        assert_eq!(
            brand.profile_url(SocialChannel::Instagram),
            Some("https://www.instagram.com/zoho/")
        );
        assert_eq!(brand.accent("Yellow").map(|c| c.as_str()), Some("#F9B21D"));
        assert_eq!(brand.accent("purple"), None);
    }

    #[test]
    fn test_partial_brand_falls_back() {
        let toml_str = r##"
[metadata]
name = "Acme"

[brand]
organization = "Acme"
home_url = "https://acme.test"

[social]
twitter = "https://x.com/acme"
"##;
        let brand = Brand::parse_toml(toml_str).expect("Should parse");
        assert_eq!(brand.name, Some("Acme".to_string()));
        assert_eq!(brand.organization, "Acme");
        assert_eq!(brand.home_url, "https://acme.test");
        assert_eq!(brand.email_domain, "zohocorp.com");
        assert_eq!(brand.profile_url(SocialChannel::Twitter), Some("https://x.com/acme"));
        assert_eq!(
            brand.profile_url(SocialChannel::Facebook),
            Some("https://www.facebook.com/zoho")
        );
    }

    #[test]
    fn test_resolve_accent() {
        let brand = Brand::default();
        assert_eq!(brand.resolve_accent("green").as_str(), "#089949");
        assert_eq!(brand.resolve_accent("#123456").as_str(), "#123456");
        assert_eq!(brand.resolve_accent("not a color").as_str(), "#E42527");
    }

    #[test]
    fn test_invalid_accent_preset() {
        let toml_str = r##"
[accents]
broken = "orange"
"##;
        let result = Brand::parse_toml(toml_str);
        assert!(matches!(result, Err(BrandError::InvalidAccent { .. })));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Brand::parse_toml(invalid);
        assert!(matches!(result, Err(BrandError::ParseError(_))));
    }
}
