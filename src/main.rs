//! Signature Studio CLI
//!
//! Usage:
//!   signature-studio [OPTIONS] [FORM_FILE]
//!
//! Options:
//!   -s, --style <STYLE>      Signature layout
//!   -a, --accent <COLOR>     Hex color or brand preset name
//!   -b, --brand <FILE>       Brand file (TOML format)
//!   --export <DIR>           Write signature.html and signature.txt
//!   --styles                 List available styles
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use signature_studio::clipboard::{ClipboardError, ClipboardManager, DirectoryClipboard, WriterClipboard};
use signature_studio::diagnostics::ErrorContext;
use signature_studio::help::EmailClient;
use signature_studio::{
    html_to_plain_text, AppStateManager, Brand, BrandError, FormData, FormField, FormFileError,
    RendererConfig, SignatureRenderer, SignatureStyle, SocialChannel, SocialDisplay,
};

#[derive(Parser)]
#[command(name = "signature-studio")]
#[command(about = "Generate HTML email signatures")]
struct Cli {
    /// Form file, TOML or JSON (.json); reads TOML from stdin if not provided
    form: Option<PathBuf>,

    /// Signature style
    #[arg(short, long, default_value = "classic")]
    style: SignatureStyle,

    /// Accent color as #RRGGBB or a brand preset name (red, green, ...)
    #[arg(short, long)]
    accent: Option<String>,

    /// Brand file (TOML format)
    #[arg(short, long)]
    brand: Option<PathBuf>,

    /// Comma separated social channels, in display order
    #[arg(long, value_delimiter = ',')]
    social: Vec<String>,

    /// Show social channels as icons instead of text
    #[arg(long)]
    icons: bool,

    /// Render the on-screen preview variant
    #[arg(long)]
    preview: bool,

    /// Print the plain-text version instead of HTML
    #[arg(long)]
    text: bool,

    /// Minify the HTML output
    #[arg(long)]
    minify: bool,

    /// Base URL for logo assets
    #[arg(long, env = "SIGNATURE_LOGO_BASE")]
    logo_base: Option<String>,

    /// Write signature.html and signature.txt into a directory
    #[arg(long)]
    export: Option<PathBuf>,

    /// List available styles
    #[arg(long)]
    styles: bool,

    /// Print paste instructions for an email client
    #[arg(long, value_name = "CLIENT")]
    instructions: Option<String>,

    /// Print diagnostics JSON when something fails
    #[arg(long)]
    diagnostics: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Brand(#[from] BrandError),
    #[error("{report}")]
    Form {
        report: String,
        #[source]
        source: FormFileError,
    },
    #[error("Failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("Unknown accent '{0}': expected #RRGGBB or a preset name")]
    Accent(String),
    #[error("Unknown social channel '{0}'")]
    Channel(String),
    #[error("{0}")]
    Clipboard(#[from] ClipboardError),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.styles {
        print_styles();
        return;
    }

    if let Some(id) = &cli.instructions {
        println!("{}", EmailClient::from_id(id).instructions());
        return;
    }

    if cli.form.is_none() && io::stdin().is_terminal() {
        // Nothing piped in: show usage rather than waiting on a terminal
        if let Err(e) = write_usage(&mut io::stdout()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let mut manager = AppStateManager::default();
    if let Err(e) = run(&cli, &mut manager) {
        eprintln!("Error: {}", e);
        if cli.diagnostics {
            eprintln!("{}", ErrorContext::capture(&e, manager.state()).to_json());
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "signature_studio=debug"
    } else {
        "signature_studio=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli, manager: &mut AppStateManager) -> Result<(), CliError> {
    let brand = match &cli.brand {
        Some(path) => Brand::from_file(path)?,
        None => Brand::default(),
    };
    *manager = AppStateManager::new(brand.clone());

    let data = read_form(cli.form.as_deref())?;
    // Blank fields keep the manager's defaults, such as the tracked website
    for field in FormField::ALL {
        if let Some(value) = data.get(field) {
            manager.update_form_data(field, value);
        }
    }
    manager.set_signature_style(cli.style);

    if let Some(value) = &cli.accent {
        let accent = match brand.accent(value) {
            Some(preset) => preset.clone(),
            None => value.parse().map_err(|_| CliError::Accent(value.clone()))?,
        };
        manager.set_accent_color(accent);
    }

    let mut order = Vec::with_capacity(cli.social.len());
    for id in cli.social.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
        order.push(SocialChannel::from_id(id).ok_or_else(|| CliError::Channel(id.to_string()))?);
    }
    manager.set_channel_order(&order);
    for channel in SocialChannel::CANONICAL {
        manager.set_social_channel_enabled(channel, order.contains(&channel));
    }
    if cli.icons {
        manager.set_social_display(SocialDisplay::Icon);
    }

    let mut config = RendererConfig::new().with_brand(brand).with_minify(cli.minify);
    if let Some(base) = &cli.logo_base {
        config = config.with_logo_base_url(base.clone());
    }
    let renderer = SignatureRenderer::new(config);

    if let Some(dir) = &cli.export {
        let mut clipboard = ClipboardManager::new()
            .with_backend(DirectoryClipboard::new(dir))
            .with_backend(WriterClipboard::new(io::stdout()));
        let backend = clipboard.copy_signature(manager, &renderer)?;
        eprintln!("Signature exported via {} backend", backend);
        return Ok(());
    }

    let html = if cli.preview {
        manager.render_preview(&renderer)
    } else {
        manager.render_copy(&renderer)
    };
    debug!(preview = cli.preview, text = cli.text, "writing output");

    if cli.text {
        println!("{}", html_to_plain_text(&html));
    } else {
        println!("{}", html);
    }
    Ok(())
}

fn write_usage(out: &mut impl Write) -> io::Result<()> {
    Cli::command().write_help(out)
}

fn read_form(path: Option<&Path>) -> Result<FormData, CliError> {
    if let Some(path) = path {
        return FormData::from_file(path).map_err(|e| {
            let filename = path.display().to_string();
            let report = match &e {
                FormFileError::Io(err) => {
                    format!("Failed to read form file '{}': {}", filename, err)
                }
                _ => e.format(&fs::read_to_string(path).unwrap_or_default(), &filename),
            };
            CliError::Form { report, source: e }
        });
    }

    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .map_err(CliError::Stdin)?;
    FormData::from_toml(&source).map_err(|e| CliError::Form {
        report: e.format(&source, "<stdin>"),
        source: e,
    })
}

fn print_styles() {
    for style in SignatureStyle::ALL {
        let marker = if style.is_legacy() { " (legacy)" } else { "" };
        println!("{:<14}{}{}", style.name(), style.description(), marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_usage_write_errors_propagate() {
        let mut buf = Vec::new();
        write_usage(&mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("Usage"));

        assert!(write_usage(&mut ClosedPipe).is_err());
    }

    #[test]
    fn test_read_form_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        fs::write(&path, r#"{"name": "Jasmine Frank"}"#).unwrap();
        assert_eq!(read_form(Some(&path)).unwrap().name, "Jasmine Frank");

        let bad = dir.path().join("form.toml");
        fs::write(&bad, "name = \"Jasmine\nphone = 1\n").unwrap();
        let err = read_form(Some(&bad)).unwrap_err();
        assert!(matches!(err, CliError::Form { source: FormFileError::Toml(_), .. }));
        assert!(err.to_string().contains("form.toml"));

        let missing = dir.path().join("missing.toml");
        let err = read_form(Some(&missing)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read form file"));
        assert!(err.to_string().contains("missing.toml"));
    }
}
