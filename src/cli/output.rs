//! Report rendering and output
//!
//! JSON and YAML serialize the summary structs as-is. The table formats
//! (markdown, TSV) go through [`ReportWriter`].

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::OutputFormat;

/// Accumulates a human readable report in markdown or TSV form
///
/// In TSV mode only table rows are emitted, one blank line between tables,
/// so the output stays pipe friendly.
pub struct ReportWriter {
    format: OutputFormat,
    out: String,
}

impl ReportWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            out: String::new(),
        }
    }

    fn is_tsv(&self) -> bool {
        self.format == OutputFormat::Tsv
    }

    pub fn title(&mut self, title: &str) {
        if !self.is_tsv() {
            self.out.push_str(&format!("# {}\n\n", title));
        }
    }

    pub fn heading(&mut self, heading: &str) {
        if !self.is_tsv() {
            self.out.push_str(&format!("\n## {}\n\n", heading));
        }
    }

    pub fn subheading(&mut self, heading: &str) {
        if !self.is_tsv() {
            self.out.push_str(&format!("\n### {}\n\n", heading));
        }
    }

    /// A free-text line (omitted in TSV)
    pub fn line(&mut self, text: &str) {
        if !self.is_tsv() {
            self.out.push_str(text);
            self.out.push('\n');
        }
    }

    pub fn table<S: AsRef<str>>(&mut self, headers: &[&str], rows: &[Vec<S>]) {
        if self.is_tsv() {
            if !self.out.is_empty() {
                self.out.push('\n');
            }
            self.out.push_str(&headers.join("\t"));
            self.out.push('\n');
            for row in rows {
                let cells: Vec<String> = row.iter().map(|c| tsv_cell(c.as_ref())).collect();
                self.out.push_str(&cells.join("\t"));
                self.out.push('\n');
            }
            return;
        }

        let mut builder = Builder::default();
        builder.push_record(headers.iter().copied());
        for row in rows {
            builder.push_record(row.iter().map(|c| c.as_ref().to_string()));
        }
        self.out
            .push_str(&builder.build().with(Style::markdown()).to_string());
        self.out.push('\n');
    }

    pub fn finish(self) -> String {
        self.out
    }
}

fn tsv_cell(s: &str) -> String {
    s.replace(['\t', '\n'], " ")
}

/// Serialize for JSON/YAML, or build the table form with `human`
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    human: impl FnOnce(&mut ReportWriter),
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(value).into_diagnostic()?;
            s.push('\n');
            Ok(s)
        }
        OutputFormat::Yaml => serde_yml::to_string(value).into_diagnostic(),
        _ => {
            let mut writer = ReportWriter::new(format);
            human(&mut writer);
            Ok(writer.finish())
        }
    }
}

pub fn write_output(content: &str, output_path: Option<PathBuf>, quiet: bool) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            writer.flush().into_diagnostic()?;
            if !quiet {
                eprintln!("Report written to: {}", path.display());
            }
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
