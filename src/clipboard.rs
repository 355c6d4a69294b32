//! Delivering the finished signature
//!
//! A [`ClipboardManager`] holds an ordered chain of backends and stops at the
//! first one that accepts the payload. Only when every backend fails is an
//! error returned.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::plaintext::html_to_plain_text;
use crate::renderer::SignatureRenderer;
use crate::state::AppStateManager;

/// File name used for the HTML half of an export
pub const HTML_FILE: &str = "signature.html";
/// File name used for the plain-text half of an export
pub const TEXT_FILE: &str = "signature.txt";

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Enter a name before copying the signature")]
    MissingName,
    #[error("No clipboard backend configured")]
    NoBackends,
    #[error("Clipboard backend unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("All clipboard backends failed: {}", join_failures(.0))]
    AllFailed(Vec<String>),
}

fn join_failures(failures: &[String]) -> String {
    failures.join("; ")
}

/// Rich clipboard content: HTML plus its plain-text rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub html: String,
    pub plain_text: String,
}

impl ClipboardPayload {
    pub fn from_html(html: impl Into<String>) -> Self {
        let html = html.into();
        let plain_text = html_to_plain_text(&html);
        Self { html, plain_text }
    }
}

/// One way of delivering a payload
pub trait ClipboardBackend {
    fn name(&self) -> &str;
    fn write(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError>;
}

/// Keeps the last payload in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<ClipboardPayload>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&ClipboardPayload> {
        self.contents.as_ref()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    fn write(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        self.contents = Some(payload.clone());
        Ok(())
    }
}

/// Writes `signature.html` and `signature.txt` into a directory
#[derive(Debug, Clone)]
pub struct DirectoryClipboard {
    dir: PathBuf,
}

impl DirectoryClipboard {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ClipboardBackend for DirectoryClipboard {
    fn name(&self) -> &str {
        "directory"
    }

    fn write(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(HTML_FILE), &payload.html)?;
        std::fs::write(self.dir.join(TEXT_FILE), &payload.plain_text)?;
        Ok(())
    }
}

/// Single-format fallback: writes the HTML to any writer
pub struct WriterClipboard<W> {
    writer: W,
}

impl<W: Write> WriterClipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ClipboardBackend for WriterClipboard<W> {
    fn name(&self) -> &str {
        "writer"
    }

    fn write(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        self.writer.write_all(payload.html.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Ordered chain of clipboard backends
#[derive(Default)]
pub struct ClipboardManager {
    backends: Vec<Box<dyn ClipboardBackend>>,
}

impl ClipboardManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a backend to the chain
    pub fn with_backend(mut self, backend: impl ClipboardBackend + 'static) -> Self {
        self.backends.push(Box::new(backend));
        self
    }

    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Try each backend in turn, returning the name of the one that worked
    pub fn copy(&mut self, payload: &ClipboardPayload) -> Result<String, ClipboardError> {
        if self.backends.is_empty() {
            return Err(ClipboardError::NoBackends);
        }
        let mut failures = Vec::new();
        for backend in &mut self.backends {
            match backend.write(payload) {
                Ok(()) => {
                    debug!(backend = backend.name(), "signature copied");
                    return Ok(backend.name().to_string());
                }
                Err(err) => {
                    warn!(backend = backend.name(), error = %err, "clipboard backend failed, trying next");
                    failures.push(format!("{}: {}", backend.name(), err));
                }
            }
        }
        Err(ClipboardError::AllFailed(failures))
    }

    /// Render the copy-mode signature for the current state and deliver it
    pub fn copy_signature(
        &mut self,
        state: &AppStateManager,
        renderer: &SignatureRenderer,
    ) -> Result<String, ClipboardError> {
        if !state.form_data().has_name() {
            return Err(ClipboardError::MissingName);
        }
        let payload = ClipboardPayload::from_html(state.render_copy(renderer));
        self.copy(&payload)
    }
}
