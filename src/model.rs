//! Data model for signature rendering
//!
//! Form contents, the closed set of signature styles, social channel options
//! and the accent color all live here. Every type is plain data: the renderer
//! borrows them and never mutates them.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::FormFileError;

/// Raw user-entered contact details. Values are never pre-escaped.
///
/// Every field is a plain string; an empty or whitespace-only value means the
/// field is absent. Use [`FormData::get`] to read a field with that rule applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    pub name: String,
    pub title: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub twitter: String,
    pub bookings: String,
    pub website: String,
}

impl FormData {
    /// Create form data with only a name set
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Read a field, treating empty and whitespace-only values as absent
    pub fn get(&self, field: FormField) -> Option<&str> {
        let value = self.raw(field);
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Read a field verbatim
    pub fn raw(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Title => &self.title,
            FormField::Department => &self.department,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Linkedin => &self.linkedin,
            FormField::Twitter => &self.twitter,
            FormField::Bookings => &self.bookings,
            FormField::Website => &self.website,
        }
    }

    /// Overwrite a field
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Title => &mut self.title,
            FormField::Department => &mut self.department,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Linkedin => &mut self.linkedin,
            FormField::Twitter => &mut self.twitter,
            FormField::Bookings => &mut self.bookings,
            FormField::Website => &mut self.website,
        };
        *slot = value.into();
    }

    /// Whether the name is filled in; an unnamed signature is not rendered
    pub fn has_name(&self) -> bool {
        self.get(FormField::Name).is_some()
    }

    /// Parse form data from TOML; missing fields are empty
    pub fn from_toml(source: &str) -> Result<Self, FormFileError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse form data from a JSON object; missing fields are empty
    pub fn from_json(source: &str) -> Result<Self, FormFileError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a form file, choosing JSON for a `.json` extension and TOML otherwise
    pub fn from_file(path: &Path) -> Result<Self, FormFileError> {
        let source = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&source)
        } else {
            Self::from_toml(&source)
        }
    }
}

/// Identifies one field of [`FormData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Title,
    Department,
    Email,
    Phone,
    Linkedin,
    Twitter,
    Bookings,
    Website,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Name,
        FormField::Title,
        FormField::Department,
        FormField::Email,
        FormField::Phone,
        FormField::Linkedin,
        FormField::Twitter,
        FormField::Bookings,
        FormField::Website,
    ];

    /// Fields the user can switch off; the name is always shown
    pub const TOGGLEABLE: [FormField; 8] = [
        FormField::Title,
        FormField::Department,
        FormField::Email,
        FormField::Phone,
        FormField::Linkedin,
        FormField::Twitter,
        FormField::Bookings,
        FormField::Website,
    ];

    /// Fields that get smart title casing while their format lock is on
    pub const TITLE_CASED: [FormField; 3] = [FormField::Name, FormField::Title, FormField::Department];

    /// Stable identifier used in storage keys and the CLI
    pub fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Title => "title",
            FormField::Department => "department",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Linkedin => "linkedin",
            FormField::Twitter => "twitter",
            FormField::Bookings => "bookings",
            FormField::Website => "website",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Visual layout of the signature
///
/// Unknown names resolve to [`SignatureStyle::Classic`], both through
/// [`SignatureStyle::from_name_or_default`] and through serde.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SignatureStyle {
    #[default]
    Classic,
    Modern,
    Compact,
    Minimal,
    Professional,
    Creative,
    /// Legacy colored name block
    Bold,
    /// Legacy centered layout without social links
    Executive,
}

impl SignatureStyle {
    /// Current styles first, legacy styles last
    pub const ALL: [SignatureStyle; 8] = [
        SignatureStyle::Classic,
        SignatureStyle::Modern,
        SignatureStyle::Compact,
        SignatureStyle::Minimal,
        SignatureStyle::Professional,
        SignatureStyle::Creative,
        SignatureStyle::Bold,
        SignatureStyle::Executive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SignatureStyle::Classic => "classic",
            SignatureStyle::Modern => "modern",
            SignatureStyle::Compact => "compact",
            SignatureStyle::Minimal => "minimal",
            SignatureStyle::Professional => "professional",
            SignatureStyle::Creative => "creative",
            SignatureStyle::Bold => "bold",
            SignatureStyle::Executive => "executive",
        }
    }

    /// One-line description shown by the CLI
    pub fn description(self) -> &'static str {
        match self {
            SignatureStyle::Classic => "Name and title above contact rows, logo below",
            SignatureStyle::Modern => "Logo column with an accent divider beside the details",
            SignatureStyle::Compact => "Two dense lines next to a small logo",
            SignatureStyle::Minimal => "Text first with a small logo, tight spacing",
            SignatureStyle::Professional => "Accent rule, logo on top, website link",
            SignatureStyle::Creative => "Thick accent bar with the logo stacked above the name",
            SignatureStyle::Bold => "Colored name block with icon social links (legacy)",
            SignatureStyle::Executive => "Centered large name with an accent line (legacy)",
        }
    }

    pub fn is_legacy(self) -> bool {
        matches!(self, SignatureStyle::Bold | SignatureStyle::Executive)
    }

    /// Parse a style name, falling back to classic for anything unknown
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for SignatureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a style name outside the closed set
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown signature style: {0}")]
pub struct UnknownStyle(pub String);

impl From<String> for SignatureStyle {
    fn from(name: String) -> Self {
        Self::from_name_or_default(&name)
    }
}

impl FromStr for SignatureStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SignatureStyle::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// Organization social channel shown in the social row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialChannel {
    Twitter,
    Linkedin,
    Facebook,
    Instagram,
}

impl SocialChannel {
    /// Canonical order used when nothing else has been chosen
    pub const CANONICAL: [SocialChannel; 4] = [
        SocialChannel::Twitter,
        SocialChannel::Linkedin,
        SocialChannel::Facebook,
        SocialChannel::Instagram,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SocialChannel::Twitter => "twitter",
            SocialChannel::Linkedin => "linkedin",
            SocialChannel::Facebook => "facebook",
            SocialChannel::Instagram => "instagram",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        SocialChannel::CANONICAL
            .into_iter()
            .find(|channel| channel.id().eq_ignore_ascii_case(id))
    }

    /// Parse channel ids in order, silently dropping unknown ones
    pub fn parse_ids<I, S>(ids: I) -> Vec<SocialChannel>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter_map(|id| SocialChannel::from_id(id.as_ref()))
            .collect()
    }
}

impl fmt::Display for SocialChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// How social channels are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialDisplay {
    #[default]
    Text,
    Icon,
}

/// Social row options. Channel order is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialOptions {
    pub enabled: bool,
    pub channels: Vec<SocialChannel>,
    #[serde(rename = "displayType")]
    pub display_type: SocialDisplay,
}

impl SocialOptions {
    /// Enabled options showing the given channels as text links
    pub fn text(channels: impl Into<Vec<SocialChannel>>) -> Self {
        Self {
            enabled: true,
            channels: channels.into(),
            display_type: SocialDisplay::Text,
        }
    }

    /// Enabled options showing the given channels as icons
    pub fn icons(channels: impl Into<Vec<SocialChannel>>) -> Self {
        Self {
            enabled: true,
            channels: channels.into(),
            display_type: SocialDisplay::Icon,
        }
    }

    /// Whether a social row should be produced at all
    pub fn is_active(&self) -> bool {
        self.enabled && !self.channels.is_empty()
    }
}

/// Errors raised while parsing an accent color
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("accent color must start with '#': {0}")]
    MissingHash(String),
    #[error("accent color must be #RGB or #RRGGBB: {0}")]
    InvalidHex(String),
}

/// Brand accent color in hex notation
///
/// Construction validates the format so the value can be written verbatim
/// into inline styles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor(String);

/// Yellow accent that needs dark text on top of it
const YELLOW: &str = "#F9B21D";

impl AccentColor {
    pub const DEFAULT: &'static str = "#E42527";

    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let value = value.trim();
        let Some(hex) = value.strip_prefix('#') else {
            return Err(ColorError::MissingHash(value.to_string()));
        };
        if !matches!(hex.len(), 3 | 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text color readable on top of this accent
    pub fn contrast_text(&self) -> &'static str {
        if self.0.eq_ignore_ascii_case(YELLOW) {
            "#333333"
        } else {
            "#FFFFFF"
        }
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccentColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccentColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.0
    }
}

/// Preview theme chosen by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than "dark" is light
    pub fn from_id(id: &str) -> Self {
        if id == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_treats_blank_as_absent() {
        let mut data = FormData::with_name("Jasmine Frank");
        data.phone = "   ".to_string();
        assert_eq!(data.get(FormField::Name), Some("Jasmine Frank"));
        assert_eq!(data.get(FormField::Phone), None);
        assert_eq!(data.get(FormField::Email), None);
    }

    #[test]
    fn test_set_and_raw() {
        let mut data = FormData::default();
        data.set(FormField::Bookings, "https://bookings.zohocorp.com/#/jf");
        assert_eq!(data.raw(FormField::Bookings), "https://bookings.zohocorp.com/#/jf");
    }

    #[test]
    fn test_form_from_toml_and_json() {
        let data = FormData::from_toml("name = \"Jasmine Frank\"\nphone = \"512-555-1234\"\n").unwrap();
        assert_eq!(data.name, "Jasmine Frank");
        assert_eq!(data.phone, "512-555-1234");
        assert_eq!(data.email, "");

        let data = FormData::from_json(r#"{"name": "Jasmine Frank", "linkedin": "in/jf"}"#).unwrap();
        assert_eq!(data.linkedin, "in/jf");
    }

    #[test]
    fn test_form_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("form.JSON");
        std::fs::write(&json, r#"{"name": "Jasmine Frank"}"#).unwrap();
        assert_eq!(FormData::from_file(&json).unwrap().name, "Jasmine Frank");

        let toml = dir.path().join("form.toml");
        std::fs::write(&toml, "name = \"Jasmine Frank\"\n").unwrap();
        assert_eq!(FormData::from_file(&toml).unwrap().name, "Jasmine Frank");

        // JSON content in a TOML-named file is parsed as TOML
        let wrong = dir.path().join("form.txt");
        std::fs::write(&wrong, r#"{"name": "Jasmine Frank"}"#).unwrap();
        assert!(matches!(FormData::from_file(&wrong), Err(FormFileError::Toml(_))));

        assert!(matches!(
            FormData::from_file(&dir.path().join("missing.toml")),
            Err(FormFileError::Io(_))
        ));
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("Modern".parse::<SignatureStyle>(), Ok(SignatureStyle::Modern));
        assert_eq!(" bold ".parse::<SignatureStyle>(), Ok(SignatureStyle::Bold));
        assert!("fancy".parse::<SignatureStyle>().is_err());
        assert_eq!(SignatureStyle::from_name_or_default("fancy"), SignatureStyle::Classic);
    }

    #[test]
    fn test_style_serde_unknown_is_classic() {
        let style: SignatureStyle = serde_json::from_str("\"neon\"").unwrap();
        assert_eq!(style, SignatureStyle::Classic);
        let style: SignatureStyle = serde_json::from_str("\"creative\"").unwrap();
        assert_eq!(style, SignatureStyle::Creative);
    }

    #[test]
    fn test_legacy_styles() {
        let legacy: Vec<_> = SignatureStyle::ALL.into_iter().filter(|s| s.is_legacy()).collect();
        assert_eq!(legacy, vec![SignatureStyle::Bold, SignatureStyle::Executive]);
    }

    #[test]
    fn test_parse_channel_ids_keeps_order_and_drops_unknown() {
        let channels = SocialChannel::parse_ids(["instagram", "myspace", "twitter"]);
        assert_eq!(channels, vec![SocialChannel::Instagram, SocialChannel::Twitter]);
    }

    #[test]
    fn test_accent_color_validation() {
        assert!(AccentColor::parse("#E42527").is_ok());
        assert!(AccentColor::parse("#abc").is_ok());
        assert_eq!(
            AccentColor::parse("E42527"),
            Err(ColorError::MissingHash("E42527".to_string()))
        );
        assert!(matches!(
            AccentColor::parse("#E4252Z"),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(AccentColor::parse("red; background:url(x)").is_err());
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(AccentColor::parse("#F9B21D").unwrap().contrast_text(), "#333333");
        assert_eq!(AccentColor::parse("#f9b21d").unwrap().contrast_text(), "#333333");
        assert_eq!(AccentColor::default().contrast_text(), "#FFFFFF");
    }

    #[test]
    fn test_social_options_activity() {
        assert!(!SocialOptions::default().is_active());
        assert!(!SocialOptions::text(vec![]).is_active());
        assert!(SocialOptions::icons(vec![SocialChannel::Facebook]).is_active());
    }

    #[test]
    fn test_theme_ids() {
        assert_eq!(Theme::from_id("dark"), Theme::Dark);
        assert_eq!(Theme::from_id("midnight"), Theme::Light);
    }
}
