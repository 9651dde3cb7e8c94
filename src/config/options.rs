// src/config/options.rs
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// One CLI invocation: which snapshot to read and what to emit.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Saved planet list page (HTML snapshot).
    pub input: PathBuf,
    /// Original page URL; when given, the run is gated on it resolving
    /// to the planet list view.
    pub url: Option<String>,
    /// Write output here instead of stdout.
    pub out: Option<PathBuf>,
    /// Emit the per-planet record table instead of the summary block.
    pub records: bool,
    pub format: ExportFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            url: None,
            out: None,
            records: false,
            format: ExportFormat::Tsv,
        }
    }
}
