//! Integration tests for form state, preferences and export

use pretty_assertions::assert_eq;

use signature_studio::clipboard::{ClipboardManager, DirectoryClipboard, HTML_FILE, TEXT_FILE};
use signature_studio::format::{generate_email_prefix, to_smart_title_case};
use signature_studio::storage::{JsonFileStore, KeyValueStore, Preferences, THEME_KEY};
use signature_studio::validation::EmailPrefixError;
use signature_studio::vault::SecureStore;
use signature_studio::{
    AccentColor, AppStateManager, FormField, SignatureRenderer, SignatureStyle, SocialChannel,
    Theme,
};

#[test]
fn test_name_fills_email_until_prefix_typed() {
    let mut manager = AppStateManager::default();
    manager.set_name("jasmine frank");
    assert_eq!(manager.form_data().name, "Jasmine Frank");
    assert_eq!(manager.form_data().email, "jasmine.frank@zohocorp.com");

    assert_eq!(manager.set_email_prefix("JFrank"), Ok(()));
    manager.set_name("jasmine frank-lee");
    assert_eq!(manager.form_data().email, "jfrank@zohocorp.com");

    // Clearing the prefix hands control back to the name
    assert_eq!(manager.set_email_prefix(""), Ok(()));
    manager.set_name("jasmine frank");
    assert_eq!(manager.form_data().email, "jasmine.frank@zohocorp.com");
}

#[test]
fn test_invalid_prefix_still_previews() {
    let mut manager = AppStateManager::default();
    assert_eq!(
        manager.set_email_prefix("j..frank"),
        Err(EmailPrefixError::MisplacedDot)
    );
    assert_eq!(manager.form_data().email, "j..frank@zohocorp.com");
}

#[test]
fn test_format_lock_controls_title_case() {
    let mut manager = AppStateManager::default();
    manager.set_title("vp of ios engineering");
    assert_eq!(manager.form_data().title, "VP of iOS Engineering");

    assert!(!manager.toggle_format_lock(FormField::Title));
    manager.set_title("vp of ios engineering");
    assert_eq!(manager.form_data().title, "vp of ios engineering");
}

#[test]
fn test_disabled_fields_leave_output() {
    let mut manager = AppStateManager::default();
    manager.set_name("Jasmine Frank");
    manager.update_form_data(FormField::Phone, "+1 (512) 555-1234");
    let renderer = SignatureRenderer::default();
    assert!(manager.render_copy(&renderer).contains("tel:+15125551234"));

    manager.update_field_toggle(FormField::Phone, false);
    assert_eq!(manager.form_data().phone, "");
    assert!(!manager.render_copy(&renderer).contains("tel:"));

    // The name cannot be switched off
    manager.update_field_toggle(FormField::Name, false);
    assert!(manager.is_field_enabled(FormField::Name));
    assert!(manager.render_preview(&renderer).contains("Jasmine Frank"));
}

#[test]
fn test_channel_reorder_reaches_output() {
    let mut manager = AppStateManager::default();
    manager.set_name("Jasmine Frank");
    assert!(manager.move_social_channel(SocialChannel::Instagram, 0));
    assert_eq!(
        manager.state().social_options.channels.first(),
        Some(&SocialChannel::Instagram)
    );

    let html = manager.render_copy(&SignatureRenderer::default());
    assert!(html.find("instagram.com").unwrap() < html.find("https://x.com/Zoho").unwrap());
}

#[test]
fn test_preferences_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut manager = AppStateManager::default();
    manager.set_name("Jasmine Frank");
    manager.set_dark_mode(true);
    manager.set_accent_color(AccentColor::parse("#089949").unwrap());
    manager.set_format_lock(FormField::Department, false);
    manager.move_social_channel(SocialChannel::Facebook, 0);
    let mut prefs = Preferences::new(JsonFileStore::open(&path).unwrap());
    manager.save_preferences(&mut prefs).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("Jasmine"));

    let mut restarted = AppStateManager::default();
    restarted.load_preferences(&Preferences::new(JsonFileStore::open(&path).unwrap()));
    assert_eq!(restarted.theme(), Theme::Dark);
    assert_eq!(restarted.state().accent_color.as_str(), "#089949");
    assert!(!restarted.format_lock(FormField::Department));
    assert_eq!(restarted.state().channel_order[0], SocialChannel::Facebook);
    assert_eq!(restarted.form_data().name, "");
}

#[test]
fn test_secure_store_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("secure.json");

    let mut secure = SecureStore::new(JsonFileStore::open(&path).unwrap());
    secure.set_secure(THEME_KEY, "dark").unwrap();
    assert_eq!(secure.get_secure(THEME_KEY).as_deref(), Some("dark"));
    assert_ne!(secure.store().get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn test_export_writes_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = AppStateManager::default();
    manager.set_name("Jasmine Frank");
    manager.set_title("product manager");
    manager.set_signature_style(SignatureStyle::Compact);

    let mut clipboard = ClipboardManager::new().with_backend(DirectoryClipboard::new(dir.path()));
    let used = clipboard
        .copy_signature(&manager, &SignatureRenderer::default())
        .unwrap();
    assert_eq!(used, "directory");

    let html = std::fs::read_to_string(dir.path().join(HTML_FILE)).unwrap();
    assert!(html.contains("prefers-color-scheme"));
    let text = std::fs::read_to_string(dir.path().join(TEXT_FILE)).unwrap();
    assert!(text.contains("Jasmine Frank"));
    assert!(text.contains("Product Manager"));
    assert!(!text.contains('<'));
}

#[test]
fn test_email_prefix_shapes() {
    for name in ["Jasmine Frank", "jasmine  de la frank", "Jasmine O'Frank Jr"] {
        let prefix = generate_email_prefix(name);
        assert_eq!(prefix.matches('.').count(), 1, "{name}");
        assert!(prefix.chars().all(|c| c.is_ascii_lowercase() || c == '.'), "{name}");
    }
    assert_eq!(generate_email_prefix("Cher"), "cher");
    assert_eq!(generate_email_prefix("   "), "");
}

#[test]
fn test_title_case_is_stable() {
    for input in ["director of marketing", "vp of ios engineering", "head of ai and ml"] {
        let once = to_smart_title_case(input);
        assert_eq!(to_smart_title_case(&once), once);
    }
}
