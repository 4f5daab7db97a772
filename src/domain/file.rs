//! Uploaded files and how their declared type selects an importer

use std::path::Path;

use crate::config::ImportSettings;

/// MIME type browsers declare for `.xlsx` workbooks
pub const SPREADSHEET_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// MIME type for plain-text address lists
pub const TEXT_MIME: &str = "text/plain";

/// Fallback type for anything unrecognised
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// A file chosen by the user, with the type it was declared as
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Declared MIME type for a file on disk, derived from its extension the
    /// way a browser file input does it.
    pub fn mime_for_path(path: &Path) -> &'static str {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("xlsx") => SPREADSHEET_MIME,
            Some("txt") => TEXT_MIME,
            _ => OCTET_STREAM_MIME,
        }
    }
}

/// Importer selected for an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Spreadsheet,
    PlainText,
    Unsupported,
}

impl FileKind {
    /// Dispatch on the declared MIME type (never on the extension)
    pub fn from_mime(mime: &str, settings: &ImportSettings) -> Self {
        if mime == settings.spreadsheet_mime {
            FileKind::Spreadsheet
        } else if mime == settings.text_mime {
            FileKind::PlainText
        } else {
            FileKind::Unsupported
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Spreadsheet => "spreadsheet",
            FileKind::PlainText => "text",
            FileKind::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
