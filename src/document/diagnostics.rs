//! Dataset document diagnostics with source-annotated error messages

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use super::DocumentFormat;

/// Syntax or shape error in a dataset document, pointing at the offending line
#[derive(Debug, Error, Diagnostic)]
#[error("{format} error in dataset: {message}")]
#[diagnostic(code(pmo::dataset::syntax))]
pub struct SyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    format: DocumentFormat,

    /// The underlying parser message
    message: String,
}

impl SyntaxError {
    /// Create an error from a serde_yml error
    pub fn from_yaml(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));
        Self::at_location(DocumentFormat::Yaml, err.to_string(), source, filename, line, column)
    }

    /// Create an error from a serde_json error
    pub fn from_json(err: &serde_json::Error, source: &str, filename: &str) -> Self {
        let line = err.line().max(1);
        let column = err.column().max(1);
        Self::at_location(DocumentFormat::Json, err.to_string(), source, filename, line, column)
    }

    /// Create an error at a specific 1-based line and column
    pub fn at_location(
        format: DocumentFormat,
        message: impl Into<String>,
        source: &str,
        filename: &str,
        line: usize,
        column: usize,
    ) -> Self {
        let message = message.into();
        let offset = line_col_to_offset(source, line, column);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help: generate_help(&message),
            format,
            message,
        }
    }
}

/// Convert line/column to byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut current_line = 1;
    let mut line_start = None;

    if line <= 1 {
        line_start = Some(0);
    } else {
        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                current_line += 1;
                if current_line == line {
                    line_start = Some(i + 1);
                    break;
                }
            }
        }
    }

    let Some(start) = line_start else {
        return source.len().saturating_sub(1);
    };

    // Walk columns as characters, stopping at the end of the line
    let mut col = 1;
    for (j, c) in source[start..].char_indices() {
        if col == column || c == '\n' {
            return start + j;
        }
        col += 1;
    }

    source.len().saturating_sub(1)
}

/// Suggest a fix based on the parser message
fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("tab") {
        return Some(
            "YAML requires spaces for indentation, not tabs. Replace tabs with spaces.".to_string(),
        );
    }

    if msg_lower.contains("duplicate") {
        return Some("Each key can only appear once. Remove or rename the duplicate key.".to_string());
    }

    if msg_lower.contains("missing field") {
        return Some(
            "Every record needs its identifying fields (id, name, project_id, ...).".to_string(),
        );
    }

    if msg_lower.contains("invalid type") {
        return Some("Check the value type: numbers must not be quoted, lists use '- item'.".to_string());
    }

    if msg_lower.contains("mapping values are not allowed") {
        return Some("You may be missing a space after ':' or have incorrect indentation.".to_string());
    }

    if msg_lower.contains("trailing comma") || msg_lower.contains("expected value") {
        return Some("JSON does not allow trailing commas or unquoted values.".to_string());
    }

    None
}
