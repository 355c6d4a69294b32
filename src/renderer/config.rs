//! Configuration for signature rendering

use crate::brand::Brand;

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Organization settings: home page, logos, company profiles
    pub brand: Brand,

    /// Whether to prefix output with the dark-mode `<style>` block
    pub include_dark_mode: bool,

    /// Whether to collapse whitespace between tags
    pub minify: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            include_dark_mode: true,
            minify: false,
        }
    }
}

impl RendererConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different brand
    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brand = brand;
        self
    }

    /// Set the logo asset base, e.g. `./assets` for local previews
    pub fn with_logo_base_url(mut self, base: impl Into<String>) -> Self {
        self.brand.logo_base_url = base.into();
        self
    }

    /// Set whether the dark-mode block is emitted
    pub fn with_dark_mode(mut self, include: bool) -> Self {
        self.include_dark_mode = include;
        self
    }

    /// Set whether to minify output
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }
}
