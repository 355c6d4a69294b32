//! Error types for loading form files

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum FormFileError {
    #[error("Failed to read form file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid form TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid form JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormFileError {
    /// Location of the problem in the source, when the parser reported one
    pub fn span(&self, source: &str) -> Option<Span> {
        match self {
            FormFileError::Io(_) => None,
            FormFileError::Toml(err) => err.span(),
            FormFileError::Json(err) => {
                let offset = line_col_offset(source, err.line(), err.column())?;
                Some(offset..(offset + 1).min(source.len()))
            }
        }
    }

    fn message(&self) -> String {
        match self {
            FormFileError::Io(err) => err.to_string(),
            FormFileError::Toml(err) => err.message().to_string(),
            FormFileError::Json(err) => err.to_string(),
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a location fall back to their display text.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span(source) else {
            return self.to_string();
        };
        let message = self.message();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid form file")
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Byte offset of a 1-based line and column
fn line_col_offset(source: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(source.len()))
}
