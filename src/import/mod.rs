//! Bulk import of addresses from uploaded files
//!
//! Supports two formats, chosen by the file's declared MIME type:
//! - Plain text: one `address,amount` pair per line
//! - Spreadsheet (xlsx): first sheet, header row naming `address` and `amount`
//!
//! Anything else is ignored without error. Parsed rows carry no group or
//! identifier; the editor turns them into addresses when it applies a batch.

mod spreadsheet;
mod text;
mod worker;

pub use spreadsheet::{rows_from_tabular, CalamineParser, TabularParser, TabularRow};
pub use text::parse_text;
pub use worker::{read_and_import, ImportEvent, ImportTicket, ImportWorker};

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::config::ImportSettings;
use crate::domain::{FileKind, UploadedFile};

/// Errors raised while reading or parsing an uploaded file
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("Import task failed: {0}")]
    Task(String),
}

/// One parsed line or spreadsheet row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportedRow {
    pub address: String,
    /// Free-text amount; empty when the source had none
    pub amount: String,
}

impl ImportedRow {
    pub fn new(address: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            amount: amount.into(),
        }
    }
}

/// Rows parsed from one file, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBatch {
    pub kind: FileKind,
    pub rows: Vec<ImportedRow>,
}

impl ImportBatch {
    pub fn empty(kind: FileKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Imported {} rows ({})", self.rows.len(), self.kind)
    }
}

/// Parse an uploaded file into rows, dispatching on its declared type
pub fn import_bytes(
    file: &UploadedFile,
    settings: &ImportSettings,
    tabular: &dyn TabularParser,
) -> Result<ImportBatch, ImportError> {
    let kind = FileKind::from_mime(&file.mime, settings);
    let rows = match kind {
        FileKind::Spreadsheet => rows_from_tabular(tabular.parse_tabular(&file.bytes)?),
        FileKind::PlainText => parse_text(&file.bytes),
        FileKind::Unsupported => {
            debug!(
                "Ignoring '{}': unsupported file type '{}'",
                file.name, file.mime
            );
            Vec::new()
        }
    };

    Ok(ImportBatch { kind, rows })
}
