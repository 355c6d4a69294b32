//! Signature Studio - HTML email signatures for an organization
//!
//! This library turns a person's contact details into a self-contained,
//! inline-styled HTML signature in one of eight layouts, along with the
//! sanitizing, formatting, state and preference plumbing around it.
//!
//! # Example
//!
//! ```rust
//! use signature_studio::{generate, AccentColor, FormData, SignatureStyle, SocialOptions};
//!
//! let data = FormData::with_name("Jasmine Frank");
//! let html = generate(
//!     &data,
//!     SignatureStyle::Classic,
//!     &SocialOptions::default(),
//!     &AccentColor::default(),
//!     false,
//! );
//! assert!(html.contains("Jasmine Frank"));
//! assert!(html.contains("<table"));
//! ```

pub mod brand;
pub mod clipboard;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod help;
pub mod model;
pub mod plaintext;
pub mod renderer;
pub mod sanitize;
pub mod state;
pub mod storage;
pub mod validation;
pub mod vault;

use std::sync::OnceLock;

pub use brand::{Brand, BrandError};
pub use clipboard::{ClipboardError, ClipboardManager, ClipboardPayload};
pub use error::FormFileError;
pub use model::{
    AccentColor, ColorError, FormData, FormField, SignatureStyle, SocialChannel, SocialDisplay,
    SocialOptions, Theme,
};
pub use plaintext::html_to_plain_text;
pub use renderer::{RendererConfig, SignatureRenderer, PREVIEW_PLACEHOLDER};
pub use state::{AppState, AppStateManager};

fn default_renderer() -> &'static SignatureRenderer {
    static RENDERER: OnceLock<SignatureRenderer> = OnceLock::new();
    RENDERER.get_or_init(SignatureRenderer::default)
}

/// Render a signature with the default brand and built-in styles
///
/// Unknown or missing styles are never an error: dispatch falls back to the
/// classic layout.
pub fn generate(
    data: &FormData,
    style: SignatureStyle,
    social: &SocialOptions,
    accent: &AccentColor,
    is_preview: bool,
) -> String {
    default_renderer().generate(data, style, social, accent, is_preview)
}

/// Like [`generate`] in preview mode, but shows a placeholder until a name is set
pub fn generate_preview(
    data: &FormData,
    style: SignatureStyle,
    social: &SocialOptions,
    accent: &AccentColor,
) -> String {
    default_renderer().generate_preview(data, style, social, accent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_matches_default_renderer() {
        let data = FormData::with_name("Jasmine Frank");
        let accent = AccentColor::default();
        let social = SocialOptions::default();
        assert_eq!(
            generate(&data, SignatureStyle::Modern, &social, &accent, true),
            SignatureRenderer::default().generate(&data, SignatureStyle::Modern, &social, &accent, true)
        );
    }

    #[test]
    fn test_generate_preview_placeholder() {
        let html = generate_preview(
            &FormData::default(),
            SignatureStyle::Classic,
            &SocialOptions::default(),
            &AccentColor::default(),
        );
        assert_eq!(html, PREVIEW_PLACEHOLDER);
    }
}
