//! Settings sections

use serde::{Deserialize, Serialize};

use crate::domain::{SPREADSHEET_MIME, TEXT_MIME};

/// Bulk import settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    /// Declared type routed to the spreadsheet importer
    #[serde(default = "default_spreadsheet_mime")]
    pub spreadsheet_mime: String,

    /// Declared type routed to the plain-text importer
    #[serde(default = "default_text_mime")]
    pub text_mime: String,

    /// Extensions offered by the file picker. This is only a hint: the
    /// importer is chosen by declared type.
    #[serde(default = "default_accept_extensions")]
    pub accept_extensions: Vec<String>,
}

fn default_spreadsheet_mime() -> String {
    SPREADSHEET_MIME.to_string()
}

fn default_text_mime() -> String {
    TEXT_MIME.to_string()
}

fn default_accept_extensions() -> Vec<String> {
    vec!["txt".to_string(), "xlsx".to_string()]
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            spreadsheet_mime: default_spreadsheet_mime(),
            text_mime: default_text_mime(),
            accept_extensions: default_accept_extensions(),
        }
    }
}

/// Dialog window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_window_width() -> f32 {
    600.0
}

fn default_window_height() -> f32 {
    480.0
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}
