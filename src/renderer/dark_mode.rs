//! Dark-mode style block
//!
//! Preview output only reacts to the `.dark-mode` class on an ancestor, so the
//! on-page toggle decides what the sender sees. Copy output also carries a
//! `prefers-color-scheme` query so the pasted signature follows the
//! recipient's email client.

const PREVIEW_STYLES: &str = r#"<style>
  .dark-mode .sig-name { color: #FFFFFF !important; }
  .dark-mode .sig-title { color: #E0E0E0 !important; }
  .dark-mode .sig-separator { color: #666666 !important; }
  .dark-mode .sig-logo-light { display: none !important; }
  .dark-mode .sig-logo-dark { display: inline-block !important; }

  .sig-logo-dark { display: none; }
</style>"#;

const COPY_STYLES: &str = r#"<style>
  @media (prefers-color-scheme: dark) {
    .sig-name { color: #FFFFFF !important; }
    .sig-title { color: #E0E0E0 !important; }
    .sig-separator { color: #666666 !important; }
    .sig-logo-light { display: none !important; }
    .sig-logo-dark { display: inline-block !important; }
  }

  .dark-mode .sig-name { color: #FFFFFF !important; }
  .dark-mode .sig-title { color: #E0E0E0 !important; }
  .dark-mode .sig-separator { color: #666666 !important; }
  .dark-mode .sig-logo-light { display: none !important; }
  .dark-mode .sig-logo-dark { display: inline-block !important; }

  .sig-logo-dark { display: none; }
</style>"#;

/// The `<style>` block placed before every signature table
pub fn dark_mode_styles(is_preview: bool) -> &'static str {
    if is_preview {
        PREVIEW_STYLES
    } else {
        COPY_STYLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_ignores_system_scheme() {
        let css = dark_mode_styles(true);
        assert!(css.starts_with("<style>"));
        assert!(css.ends_with("</style>"));
        assert!(!css.contains("prefers-color-scheme"));
        assert!(css.contains(".dark-mode .sig-logo-dark"));
    }

    #[test]
    fn test_copy_follows_system_scheme() {
        let css = dark_mode_styles(false);
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        assert!(css.contains(".dark-mode .sig-separator"));
        assert!(css.contains(".sig-logo-dark { display: none; }"));
    }
}
