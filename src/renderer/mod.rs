//! HTML signature renderer
//!
//! [`SignatureRenderer`] resolves the website, builds the social row once and
//! dispatches to the style renderer registered for the requested style.
//! Rendering is a pure string computation: the same inputs always give the
//! same bytes.

pub mod config;
pub mod contact;
pub mod dark_mode;
pub mod logos;
pub mod social;
pub mod styles;

use tracing::debug;

use crate::format::minify_html;
use crate::model::{AccentColor, FormData, FormField, SignatureStyle, SocialOptions};
use crate::sanitize::sanitize_url;

pub use config::RendererConfig;
pub use styles::{RegistryError, SignatureContext, StyleRegistry, StyleRenderer};

/// Shown in the preview pane until a name is entered
pub const PREVIEW_PLACEHOLDER: &str = r#"<div style="text-align: center; padding: 40px 20px; color: #999999;"><p style="font-size: 16px; margin: 0;">Fill in your name to preview the signature</p></div>"#;

/// Renders signatures with a fixed config and style registry
#[derive(Debug, Default)]
pub struct SignatureRenderer {
    config: RendererConfig,
    registry: StyleRegistry,
}

impl SignatureRenderer {
    /// Renderer with the built-in styles
    pub fn new(config: RendererConfig) -> Self {
        Self::with_registry(config, StyleRegistry::builtin())
    }

    /// Renderer with a custom set of styles
    pub fn with_registry(config: RendererConfig, registry: StyleRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Website link target: the sanitized form value, else the brand home page
    pub fn resolve_website(&self, data: &FormData) -> String {
        let home = &self.config.brand.home_url;
        match data.get(FormField::Website) {
            None => home.clone(),
            Some(value) => sanitize_url(value).unwrap_or_else(|| {
                debug!("website rejected by sanitizer, using home page");
                home.clone()
            }),
        }
    }

    /// Render a signature
    ///
    /// Output is the optional dark-mode `<style>` block followed by exactly
    /// one top-level `<table>`.
    pub fn generate(
        &self,
        data: &FormData,
        style: SignatureStyle,
        social: &SocialOptions,
        accent: &AccentColor,
        is_preview: bool,
    ) -> String {
        let website_url = self.resolve_website(data);
        let social_html = if social.is_active() {
            social::generate_social_links(
                &social.channels,
                social.display_type,
                accent,
                &self.config.brand,
            )
        } else {
            String::new()
        };

        let ctx = SignatureContext {
            data,
            website_url: &website_url,
            social_html: &social_html,
            social,
            accent,
            is_preview,
            config: &self.config,
        };
        let renderer = self.registry.resolve(style);
        let html = renderer.render(&ctx);
        let html = if self.config.minify {
            minify_html(&html)
        } else {
            html
        };

        debug!(
            style = %renderer.style(),
            preview = is_preview,
            bytes = html.len(),
            "rendered signature"
        );
        html
    }

    /// Render for the on-screen preview, or the placeholder when unnamed
    pub fn generate_preview(
        &self,
        data: &FormData,
        style: SignatureStyle,
        social: &SocialOptions,
        accent: &AccentColor,
    ) -> String {
        if !data.has_name() {
            return PREVIEW_PLACEHOLDER.to_string();
        }
        self.generate(data, style, social, accent, true)
    }
}
