//! Preference persistence
//!
//! Only non-sensitive preferences are stored: theme, accent color, format
//! locks and the social channel order. Form content never reaches a store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::model::{AccentColor, FormField, SocialChannel, Theme};

pub const THEME_KEY: &str = "zoho-signature-preview-theme";
pub const ACCENT_COLOR_KEY: &str = "signature-accent-color";
pub const FORMAT_LOCK_PREFIX: &str = "format-lock-";
pub const CHANNEL_ORDER_KEY: &str = "socialChannelOrder";

/// Errors that can occur when writing a store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value storage, shaped like browser local storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store, lost on exit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store backed by one JSON object on disk, rewritten on every change
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store file
    ///
    /// A missing file starts empty. A file that is not a JSON object of
    /// strings is logged and treated as empty; it is replaced on the next write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "ignoring malformed preference file");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.values.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

/// Typed preference access over a [`KeyValueStore`]
#[derive(Debug, Clone, Default)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Saved preview theme; anything but "dark" is light
    pub fn theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .map(|id| Theme::from_id(&id))
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, theme.id())
    }

    /// Saved accent color, or the default when missing or invalid
    pub fn accent_color(&self) -> AccentColor {
        match self.store.get(ACCENT_COLOR_KEY) {
            None => AccentColor::default(),
            Some(value) => AccentColor::parse(&value).unwrap_or_else(|err| {
                warn!(error = %err, "ignoring saved accent color");
                AccentColor::default()
            }),
        }
    }

    pub fn set_accent_color(&mut self, color: &AccentColor) -> Result<(), StorageError> {
        self.store.set(ACCENT_COLOR_KEY, color.as_str())
    }

    fn format_lock_key(field: FormField) -> String {
        format!("{}{}", FORMAT_LOCK_PREFIX, field.id())
    }

    /// Whether title casing is on for a field; on unless saved as "false"
    pub fn format_lock(&self, field: FormField) -> bool {
        self.store.get(&Self::format_lock_key(field)).as_deref() != Some("false")
    }

    pub fn set_format_lock(&mut self, field: FormField, enabled: bool) -> Result<(), StorageError> {
        let value = if enabled { "true" } else { "false" };
        self.store.set(&Self::format_lock_key(field), value)
    }

    /// Saved channel order; `None` when absent or malformed
    pub fn channel_order(&self) -> Option<Vec<SocialChannel>> {
        let saved = self.store.get(CHANNEL_ORDER_KEY)?;
        match serde_json::from_str::<Vec<String>>(&saved) {
            Ok(ids) => Some(SocialChannel::parse_ids(ids)),
            Err(err) => {
                warn!(error = %err, "ignoring malformed channel order");
                None
            }
        }
    }

    pub fn set_channel_order(&mut self, order: &[SocialChannel]) -> Result<(), StorageError> {
        let ids: Vec<&str> = order.iter().map(|channel| channel.id()).collect();
        let json = serde_json::to_string(&ids)?;
        self.store.set(CHANNEL_ORDER_KEY, &json)
    }
}
