//! Application state for the signature form
//!
//! [`AppStateManager`] owns the only copy of the form state. Collaborators
//! read it through getters and change it through the narrow mutators below;
//! nothing else holds a mutable reference.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::brand::Brand;
use crate::format::{generate_email_prefix, to_smart_title_case};
use crate::model::{
    AccentColor, FormData, FormField, SignatureStyle, SocialChannel, SocialDisplay, SocialOptions,
    Theme,
};
use crate::renderer::SignatureRenderer;
use crate::sanitize::{clean_linkedin_url, extract_bookings_slug, tracked_website_url, x_handle};
use crate::storage::{KeyValueStore, Preferences, StorageError};
use crate::validation::{
    is_valid_company_email, is_valid_phone, is_valid_url, validate_email_prefix, EmailPrefixError,
    FieldError,
};

/// Campaign tag on the website link before an email prefix exists
pub const DEFAULT_TRACKING_PREFIX: &str = "zoho-employee";

/// Everything the form knows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppState {
    pub form_data: FormData,
    /// On/off switch per optional field
    pub field_toggles: BTreeMap<FormField, bool>,
    pub signature_style: SignatureStyle,
    pub social_options: SocialOptions,
    /// User ordering of all channels, enabled or not
    pub channel_order: Vec<SocialChannel>,
    pub accent_color: AccentColor,
    pub dark_mode: bool,
    /// Smart title casing per name/title/department field
    pub format_locks: BTreeMap<FormField, bool>,
    pub email_prefix: String,
    /// Set once the user types a prefix; stops the name from overwriting it
    pub email_prefix_edited: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form_data: FormData::default(),
            field_toggles: FormField::TOGGLEABLE.into_iter().map(|f| (f, true)).collect(),
            signature_style: SignatureStyle::default(),
            social_options: SocialOptions::text(SocialChannel::CANONICAL.to_vec()),
            channel_order: SocialChannel::CANONICAL.to_vec(),
            accent_color: AccentColor::default(),
            dark_mode: false,
            format_locks: FormField::TITLE_CASED.into_iter().map(|f| (f, true)).collect(),
            email_prefix: String::new(),
            email_prefix_edited: false,
        }
    }
}

/// Sort `channels` by their position in `order`; unknown ones go last
fn sort_by_order(channels: &mut [SocialChannel], order: &[SocialChannel]) {
    channels.sort_by_key(|channel| {
        order
            .iter()
            .position(|candidate| candidate == channel)
            .unwrap_or(usize::MAX)
    });
}

/// Owner of [`AppState`]
#[derive(Debug, Clone)]
pub struct AppStateManager {
    state: AppState,
    brand: Brand,
}

impl Default for AppStateManager {
    fn default() -> Self {
        Self::new(Brand::default())
    }
}

impl AppStateManager {
    pub fn new(brand: Brand) -> Self {
        let state = AppState {
            accent_color: brand.default_accent.clone(),
            ..AppState::default()
        };
        let mut manager = Self { state, brand };
        manager.apply_tracked_website();
        manager
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    pub fn form_data(&self) -> &FormData {
        &self.state.form_data
    }

    /// Start over with an empty form, keeping the brand
    pub fn reset(&mut self) {
        *self = Self::new(self.brand.clone());
    }

    pub fn update_form_data(&mut self, field: FormField, value: impl Into<String>) {
        self.state.form_data.set(field, value);
    }

    /// Whether a field is shown; the name always is
    pub fn is_field_enabled(&self, field: FormField) -> bool {
        field == FormField::Name || self.state.field_toggles.get(&field).copied().unwrap_or(true)
    }

    /// Switch an optional field on or off; switching off clears its value
    pub fn update_field_toggle(&mut self, field: FormField, enabled: bool) {
        if !FormField::TOGGLEABLE.contains(&field) {
            debug!(field = field.id(), "ignoring toggle for a required field");
            return;
        }
        self.state.field_toggles.insert(field, enabled);
        if !enabled {
            self.state.form_data.set(field, "");
            if field == FormField::Email {
                self.state.email_prefix.clear();
                self.state.email_prefix_edited = false;
            }
        }
    }

    pub fn set_signature_style(&mut self, style: SignatureStyle) {
        self.state.signature_style = style;
    }

    pub fn set_accent_color(&mut self, color: AccentColor) {
        self.state.accent_color = color;
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.state.dark_mode = dark;
    }

    pub fn theme(&self) -> Theme {
        if self.state.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Whether smart title casing applies to a field
    pub fn format_lock(&self, field: FormField) -> bool {
        self.state.format_locks.get(&field).copied().unwrap_or(false)
    }

    pub fn set_format_lock(&mut self, field: FormField, enabled: bool) {
        if FormField::TITLE_CASED.contains(&field) {
            self.state.format_locks.insert(field, enabled);
        }
    }

    /// Flip a field's format lock, returning the new state
    pub fn toggle_format_lock(&mut self, field: FormField) -> bool {
        let enabled = !self.format_lock(field);
        self.set_format_lock(field, enabled);
        self.format_lock(field)
    }

    fn set_title_cased(&mut self, field: FormField, value: &str) {
        let value = if self.format_lock(field) && !value.trim().is_empty() {
            to_smart_title_case(value)
        } else {
            value.to_string()
        };
        self.state.form_data.set(field, value);
    }

    /// Set the name, deriving the email prefix until the user has typed one
    pub fn set_name(&mut self, value: &str) {
        self.set_title_cased(FormField::Name, value);
        if !self.state.email_prefix_edited && self.is_field_enabled(FormField::Email) {
            self.apply_email_prefix(generate_email_prefix(value));
        }
    }

    pub fn set_title(&mut self, value: &str) {
        self.set_title_cased(FormField::Title, value);
    }

    pub fn set_department(&mut self, value: &str) {
        self.set_title_cased(FormField::Department, value);
    }

    fn apply_email_prefix(&mut self, prefix: String) {
        let email = if prefix.is_empty() {
            String::new()
        } else {
            format!("{}@{}", prefix, self.brand.email_domain)
        };
        self.state.email_prefix = prefix;
        self.state.form_data.email = email;
        self.apply_tracked_website();
    }

    /// Point the website at the brand home page, tagged with the email prefix
    fn apply_tracked_website(&mut self) {
        if !self.is_field_enabled(FormField::Website) {
            return;
        }
        let prefix = match self.state.email_prefix.trim() {
            "" => DEFAULT_TRACKING_PREFIX,
            prefix => prefix,
        };
        self.state.form_data.website = tracked_website_url(&self.brand.home_url, prefix);
    }

    /// Set the email prefix typed by the user
    ///
    /// The value is lowercased and applied even when invalid, so the preview
    /// follows typing; the validation result is returned for display.
    pub fn set_email_prefix(&mut self, value: &str) -> Result<(), EmailPrefixError> {
        let prefix = value.trim().to_lowercase();
        self.state.email_prefix_edited = !prefix.is_empty();
        let result = if prefix.is_empty() {
            Ok(())
        } else {
            validate_email_prefix(&prefix)
        };
        self.apply_email_prefix(prefix);
        result
    }

    /// Accept a LinkedIn username or pasted profile URL
    pub fn set_linkedin_username(&mut self, value: &str) {
        self.state.form_data.linkedin = clean_linkedin_url(value);
    }

    /// Accept an X handle or pasted x.com/twitter.com URL
    pub fn set_x_username(&mut self, value: &str) {
        let handle = x_handle(value);
        self.state.form_data.twitter = if handle.is_empty() {
            String::new()
        } else {
            format!("https://x.com/{handle}")
        };
    }

    /// Accept a booking page id or a pasted booking URL
    pub fn set_bookings_id(&mut self, value: &str) {
        let value = value.trim();
        let id = if value.contains("://") || value.contains("#/") {
            extract_bookings_slug(value).unwrap_or_default()
        } else {
            value.to_string()
        };
        self.state.form_data.bookings = if id.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.brand.bookings_base_url, id)
        };
    }

    /// Turn a channel on or off; enabled channels follow the saved order
    pub fn set_social_channel_enabled(&mut self, channel: SocialChannel, enabled: bool) {
        let social = &mut self.state.social_options;
        if enabled {
            if !social.channels.contains(&channel) {
                social.channels.push(channel);
                sort_by_order(&mut social.channels, &self.state.channel_order);
            }
        } else {
            social.channels.retain(|c| *c != channel);
        }
        social.enabled = !social.channels.is_empty();
    }

    /// Move a channel to a new position in the order
    ///
    /// Returns false if the channel is not in the order. Out-of-range
    /// positions move it to the end.
    pub fn move_social_channel(&mut self, channel: SocialChannel, to: usize) -> bool {
        let order = &mut self.state.channel_order;
        let Some(from) = order.iter().position(|c| *c == channel) else {
            return false;
        };
        order.remove(from);
        let to = to.min(order.len());
        order.insert(to, channel);
        sort_by_order(&mut self.state.social_options.channels, &self.state.channel_order);
        true
    }

    /// Replace the whole order; duplicates are dropped and missing channels appended
    pub fn set_channel_order(&mut self, order: &[SocialChannel]) {
        let mut normalized: Vec<SocialChannel> = Vec::with_capacity(SocialChannel::CANONICAL.len());
        for channel in order.iter().chain(SocialChannel::CANONICAL.iter()) {
            if !normalized.contains(channel) {
                normalized.push(*channel);
            }
        }
        self.state.channel_order = normalized;
        sort_by_order(&mut self.state.social_options.channels, &self.state.channel_order);
    }

    pub fn set_social_display(&mut self, display: SocialDisplay) {
        self.state.social_options.display_type = display;
    }

    /// Check a field's current value; empty and switched-off fields pass
    pub fn validate_field(&self, field: FormField) -> Result<(), FieldError> {
        if !self.is_field_enabled(field) {
            return Ok(());
        }
        let Some(value) = self.state.form_data.get(field) else {
            return Ok(());
        };
        let value = value.trim();
        match field {
            FormField::Email if !is_valid_company_email(value, &self.brand.email_domain) => {
                Err(FieldError::Email {
                    domain: self.brand.email_domain.clone(),
                })
            }
            FormField::Phone if !is_valid_phone(value) => Err(FieldError::Phone),
            FormField::Website | FormField::Bookings if !is_valid_url(value) => {
                Err(FieldError::Url)
            }
            _ => Ok(()),
        }
    }

    /// Form data with switched-off fields removed; the name is always kept
    pub fn filtered_form_data(&self) -> FormData {
        let mut filtered = FormData::with_name(self.state.form_data.name.clone());
        for field in FormField::TOGGLEABLE {
            if self.is_field_enabled(field) {
                filtered.set(field, self.state.form_data.raw(field));
            }
        }
        filtered
    }

    /// Apply saved preferences: theme, accent, format locks and channel order
    pub fn load_preferences<S: KeyValueStore>(&mut self, prefs: &Preferences<S>) {
        self.state.dark_mode = prefs.theme() == Theme::Dark;
        self.state.accent_color = prefs.accent_color();
        for field in FormField::TITLE_CASED {
            self.state.format_locks.insert(field, prefs.format_lock(field));
        }
        if let Some(order) = prefs.channel_order() {
            self.set_channel_order(&order);
        }
    }

    /// Persist preferences; form content is never written
    pub fn save_preferences<S: KeyValueStore>(
        &self,
        prefs: &mut Preferences<S>,
    ) -> Result<(), StorageError> {
        prefs.set_theme(self.theme())?;
        prefs.set_accent_color(&self.state.accent_color)?;
        for field in FormField::TITLE_CASED {
            prefs.set_format_lock(field, self.format_lock(field))?;
        }
        prefs.set_channel_order(&self.state.channel_order)
    }

    /// Preview markup for the current state
    pub fn render_preview(&self, renderer: &SignatureRenderer) -> String {
        renderer.generate_preview(
            &self.filtered_form_data(),
            self.state.signature_style,
            &self.state.social_options,
            &self.state.accent_color,
        )
    }

    /// Clipboard markup for the current state
    pub fn render_copy(&self, renderer: &SignatureRenderer) -> String {
        renderer.generate(
            &self.filtered_form_data(),
            self.state.signature_style,
            &self.state.social_options,
            &self.state.accent_color,
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults() {
        let manager = AppStateManager::default();
        let state = manager.state();
        assert_eq!(state.signature_style, SignatureStyle::Classic);
        assert!(state.social_options.enabled);
        assert_eq!(state.social_options.channels, SocialChannel::CANONICAL.to_vec());
        assert!(manager.format_lock(FormField::Name));
        assert!(manager.is_field_enabled(FormField::Phone));
    }

    #[test]
    fn test_name_title_cased_and_prefix_derived() {
        let mut manager = AppStateManager::default();
        manager.set_name("jasmine frank");
        assert_eq!(manager.form_data().name, "Jasmine Frank");
        assert_eq!(manager.state().email_prefix, "jasmine.frank");
        assert_eq!(manager.form_data().email, "jasmine.frank@zohocorp.com");
    }

    #[test]
    fn test_format_lock_off_keeps_input() {
        let mut manager = AppStateManager::default();
        assert!(!manager.toggle_format_lock(FormField::Title));
        manager.set_title("vp of sales");
        assert_eq!(manager.form_data().title, "vp of sales");

        manager.set_department("customer success");
        assert_eq!(manager.form_data().department, "Customer Success");
    }

    #[test]
    fn test_edited_prefix_survives_name_changes() {
        let mut manager = AppStateManager::default();
        assert_eq!(manager.set_email_prefix("JF"), Ok(()));
        manager.set_name("Jasmine Frank");
        assert_eq!(manager.form_data().email, "jf@zohocorp.com");

        assert_eq!(manager.set_email_prefix(""), Ok(()));
        manager.set_name("Jasmine Frank");
        assert_eq!(manager.form_data().email, "jasmine.frank@zohocorp.com");
    }

    #[test]
    fn test_invalid_prefix_reported_but_applied() {
        let mut manager = AppStateManager::default();
        assert_eq!(
            manager.set_email_prefix("john_doe"),
            Err(EmailPrefixError::InvalidCharacters)
        );
        assert_eq!(manager.form_data().email, "john_doe@zohocorp.com");
    }

    #[test]
    fn test_profile_inputs() {
        let mut manager = AppStateManager::default();
        manager.set_linkedin_username("https://www.linkedin.com/in/jasminefrank/");
        manager.set_x_username("https://twitter.com/jasminefrank");
        manager.set_bookings_id("jasminefrank");
        let data = manager.form_data();
        assert_eq!(data.linkedin, "https://www.linkedin.com/in/jasminefrank");
        assert_eq!(data.twitter, "https://x.com/jasminefrank");
        assert_eq!(data.bookings, "https://bookings.zohocorp.com/#/jasminefrank");

        manager.set_bookings_id("https://bookings.zohocorp.com/#/jf");
        assert_eq!(manager.form_data().bookings, "https://bookings.zohocorp.com/#/jf");
        manager.set_x_username("");
        assert_eq!(manager.form_data().twitter, "");
    }

    #[test]
    fn test_toggle_off_clears_and_filters() {
        let mut manager = AppStateManager::default();
        manager.set_name("Jasmine Frank");
        manager.update_form_data(FormField::Phone, "512-555-1234");
        manager.update_field_toggle(FormField::Phone, false);
        assert_eq!(manager.form_data().phone, "");

        manager.update_form_data(FormField::Phone, "512-555-1234");
        let filtered = manager.filtered_form_data();
        assert_eq!(filtered.phone, "");
        assert_eq!(filtered.name, "Jasmine Frank");
        assert_eq!(filtered.email, "jasmine.frank@zohocorp.com");

        manager.update_field_toggle(FormField::Name, false);
        assert!(manager.is_field_enabled(FormField::Name));
    }

    #[test]
    fn test_reenabled_channel_returns_to_saved_position() {
        let mut manager = AppStateManager::default();
        manager.set_channel_order(&[SocialChannel::Instagram, SocialChannel::Twitter]);
        assert_eq!(
            manager.state().channel_order,
            vec![
                SocialChannel::Instagram,
                SocialChannel::Twitter,
                SocialChannel::Linkedin,
                SocialChannel::Facebook
            ]
        );

        manager.set_social_channel_enabled(SocialChannel::Instagram, false);
        manager.set_social_channel_enabled(SocialChannel::Linkedin, false);
        manager.set_social_channel_enabled(SocialChannel::Facebook, false);
        manager.set_social_channel_enabled(SocialChannel::Twitter, false);
        assert!(!manager.state().social_options.enabled);

        manager.set_social_channel_enabled(SocialChannel::Twitter, true);
        manager.set_social_channel_enabled(SocialChannel::Instagram, true);
        assert!(manager.state().social_options.enabled);
        assert_eq!(
            manager.state().social_options.channels,
            vec![SocialChannel::Instagram, SocialChannel::Twitter]
        );
    }

    #[test]
    fn test_move_channel() {
        let mut manager = AppStateManager::default();
        assert!(manager.move_social_channel(SocialChannel::Instagram, 0));
        assert_eq!(manager.state().social_options.channels[0], SocialChannel::Instagram);

        assert!(manager.move_social_channel(SocialChannel::Twitter, 99));
        assert_eq!(manager.state().channel_order.last(), Some(&SocialChannel::Twitter));
    }

    #[test]
    fn test_preferences_round_trip() {
        let mut manager = AppStateManager::default();
        manager.set_dark_mode(true);
        manager.set_accent_color(AccentColor::parse("#226DB4").unwrap());
        manager.set_format_lock(FormField::Name, false);
        manager.move_social_channel(SocialChannel::Facebook, 0);
        manager.set_name("Jasmine Frank");

        let mut prefs = Preferences::new(MemoryStore::new());
        manager.save_preferences(&mut prefs).unwrap();
        assert!(prefs
            .store()
            .keys()
            .all(|key| !key.contains("name") || key == "format-lock-name"));

        let mut restored = AppStateManager::default();
        restored.load_preferences(&prefs);
        assert!(restored.state().dark_mode);
        assert_eq!(restored.state().accent_color.as_str(), "#226DB4");
        assert!(!restored.format_lock(FormField::Name));
        assert_eq!(restored.state().channel_order[0], SocialChannel::Facebook);
        assert_eq!(restored.form_data().name, "");
    }

    #[test]
    fn test_render_paths() {
        let renderer = SignatureRenderer::default();
        let mut manager = AppStateManager::default();
        assert!(manager.render_preview(&renderer).contains("Fill in your name"));

        manager.set_name("Jasmine Frank");
        assert!(!manager.render_preview(&renderer).contains("prefers-color-scheme"));
        assert!(manager.render_copy(&renderer).contains("prefers-color-scheme"));
    }

    #[test]
    fn test_website_tracks_email_prefix() {
        let renderer = SignatureRenderer::default();
        let mut manager = AppStateManager::default();
        assert_eq!(
            manager.form_data().website,
            "https://www.zoho.com/?utm_source=email-signature&utm_medium=email&utm_content=zoho-employee"
        );

        manager.set_name("Jasmine Frank");
        assert!(manager
            .render_copy(&renderer)
            .contains("utm_content=jasmine.frank"));

        assert_eq!(manager.set_email_prefix("jf"), Ok(()));
        let html = manager.render_copy(&renderer);
        assert!(html.contains("utm_content=jf"));
        assert!(!html.contains("utm_content=jasmine.frank"));

        assert_eq!(manager.set_email_prefix(""), Ok(()));
        assert!(manager.form_data().website.ends_with("utm_content=zoho-employee"));

        manager.reset();
        assert!(manager.form_data().website.ends_with("utm_content=zoho-employee"));
    }

    #[test]
    fn test_switched_off_website_stays_empty() {
        let mut manager = AppStateManager::default();
        manager.update_field_toggle(FormField::Website, false);
        manager.set_name("Jasmine Frank");
        assert_eq!(manager.form_data().website, "");
    }

    #[test]
    fn test_validate_field() {
        let mut manager = AppStateManager::default();
        for field in FormField::ALL {
            assert_eq!(manager.validate_field(field), Ok(()), "{field:?}");
        }

        manager.update_form_data(FormField::Email, "jf@gmail.com");
        let err = manager.validate_field(FormField::Email).unwrap_err();
        assert_eq!(
            err,
            FieldError::Email {
                domain: "zohocorp.com".to_string()
            }
        );
        assert_eq!(err.to_string(), "Must use @zohocorp.com domain. Example: john.doe@zohocorp.com");
        manager.update_form_data(FormField::Email, "jf@zohocorp.com");
        assert_eq!(manager.validate_field(FormField::Email), Ok(()));

        manager.update_form_data(FormField::Phone, "555-1234");
        assert_eq!(manager.validate_field(FormField::Phone), Err(FieldError::Phone));
        manager.update_form_data(FormField::Phone, "+1 (512) 555-1234");
        assert_eq!(manager.validate_field(FormField::Phone), Ok(()));

        manager.update_form_data(FormField::Website, "http://");
        assert_eq!(manager.validate_field(FormField::Website), Err(FieldError::Url));
        manager.update_form_data(FormField::Bookings, "http://");
        assert_eq!(manager.validate_field(FormField::Bookings), Err(FieldError::Url));

        // Switched-off fields are not checked
        manager.update_field_toggle(FormField::Phone, false);
        manager.update_form_data(FormField::Phone, "555");
        assert_eq!(manager.validate_field(FormField::Phone), Ok(()));
    }
}
