//! Style renderers and the registry that dispatches to them
//!
//! Each style is a unit struct implementing [`StyleRenderer`]. Adding a
//! style means adding a file and registering it in [`StyleRegistry::builtin`].

mod bold;
mod classic;
mod compact;
mod creative;
mod executive;
mod minimal;
mod modern;
mod professional;

use std::collections::HashMap;

use thiserror::Error;

use crate::brand::Brand;
use crate::model::{AccentColor, FormData, FormField, SignatureStyle, SocialOptions};
use crate::sanitize::escape_html;

use super::config::RendererConfig;
use super::contact::{tier1_links, tier2_links, title_line, website_label};
use super::dark_mode::dark_mode_styles;
use super::logos::dual_logos;

pub use bold::Bold;
pub use classic::Classic;
pub use compact::Compact;
pub use creative::Creative;
pub use executive::Executive;
pub use minimal::Minimal;
pub use modern::Modern;
pub use professional::Professional;

/// Font stack for the current styles
pub(crate) const VERDANA: &str = "Verdana, Geneva, sans-serif";
/// Font stack for the legacy styles
pub(crate) const ARIAL: &str = "Arial, sans-serif";

/// Errors that can occur when registering styles
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A renderer for this style is already registered
    #[error("duplicate style renderer: {style}")]
    Duplicate { style: SignatureStyle },
}

/// Everything a style needs for one render
#[derive(Debug, Clone, Copy)]
pub struct SignatureContext<'a> {
    pub data: &'a FormData,
    /// Sanitized website, already defaulted to the brand home page
    pub website_url: &'a str,
    /// Prebuilt social row, empty when social links are off
    pub social_html: &'a str,
    pub social: &'a SocialOptions,
    pub accent: &'a AccentColor,
    pub is_preview: bool,
    pub config: &'a RendererConfig,
}

impl<'a> SignatureContext<'a> {
    pub fn brand(&self) -> &'a Brand {
        &self.config.brand
    }

    /// Escaped name
    pub fn name(&self) -> String {
        escape_html(self.data.raw(FormField::Name).trim())
    }

    /// Escaped title alone, for layouts that leave out the department
    pub fn title(&self) -> Option<String> {
        self.data
            .get(FormField::Title)
            .map(|title| escape_html(title.trim()))
    }

    pub fn title_line(&self) -> String {
        title_line(self.data)
    }

    pub fn tier1(&self) -> String {
        tier1_links(self.data, self.accent)
    }

    pub fn tier2(&self) -> String {
        tier2_links(self.data, self.accent)
    }

    pub fn logos(&self, height: u32) -> String {
        dual_logos(self.brand(), self.website_url, height)
    }

    pub fn website_label(&self) -> String {
        website_label(self.website_url)
    }

    /// Dark-mode block, or nothing when disabled in the config
    pub fn dark_mode(&self) -> &'static str {
        if self.config.include_dark_mode {
            dark_mode_styles(self.is_preview)
        } else {
            ""
        }
    }
}

/// `<div>` around non-empty content; empty content renders nothing
pub(crate) fn block(class: Option<&str>, style: &str, content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();
    format!(
        r#"<div{} style="{}">
                {}
            </div>"#,
        class_attr, style, content
    )
}

/// A single signature layout
pub trait StyleRenderer: Send + Sync {
    /// The style this renderer draws
    fn style(&self) -> SignatureStyle;

    /// The signature table, without the dark-mode block
    fn render_table(&self, ctx: &SignatureContext<'_>) -> String;

    /// Dark-mode block followed by the table
    fn render(&self, ctx: &SignatureContext<'_>) -> String {
        format!("{}{}", ctx.dark_mode(), self.render_table(ctx))
    }
}

static FALLBACK: Classic = Classic;

/// Lookup table from style to renderer
pub struct StyleRegistry {
    renderers: HashMap<SignatureStyle, Box<dyn StyleRenderer>>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("styles", &self.styles())
            .finish()
    }
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registry with all eight built-in styles
    pub fn builtin() -> Self {
        let renderers: [Box<dyn StyleRenderer>; 8] = [
            Box::new(Classic),
            Box::new(Modern),
            Box::new(Compact),
            Box::new(Minimal),
            Box::new(Professional),
            Box::new(Creative),
            Box::new(Bold),
            Box::new(Executive),
        ];
        let mut registry = Self::new();
        for renderer in renderers {
            registry.renderers.insert(renderer.style(), renderer);
        }
        registry
    }

    /// Register a renderer
    ///
    /// Returns an error if the style already has one.
    pub fn register(&mut self, renderer: Box<dyn StyleRenderer>) -> Result<(), RegistryError> {
        let style = renderer.style();
        if self.renderers.contains_key(&style) {
            return Err(RegistryError::Duplicate { style });
        }
        self.renderers.insert(style, renderer);
        Ok(())
    }

    /// Register a renderer, returning the one it displaced
    pub fn replace(&mut self, renderer: Box<dyn StyleRenderer>) -> Option<Box<dyn StyleRenderer>> {
        self.renderers.insert(renderer.style(), renderer)
    }

    /// Get the renderer for a style
    pub fn get(&self, style: SignatureStyle) -> Option<&dyn StyleRenderer> {
        self.renderers.get(&style).map(|r| &**r)
    }

    /// Renderer for a style, falling back to classic
    pub fn resolve(&self, style: SignatureStyle) -> &dyn StyleRenderer {
        self.get(style)
            .or_else(|| self.get(SignatureStyle::Classic))
            .unwrap_or(&FALLBACK)
    }

    /// Check if a style has a renderer
    pub fn contains(&self, style: SignatureStyle) -> bool {
        self.renderers.contains_key(&style)
    }

    /// Registered styles in [`SignatureStyle::ALL`] order
    pub fn styles(&self) -> Vec<SignatureStyle> {
        SignatureStyle::ALL
            .into_iter()
            .filter(|style| self.contains(*style))
            .collect()
    }
}
