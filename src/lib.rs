//! Address groups
//!
//! Edits a named group of addresses in a modal dialog. Addresses are added one
//! at a time or in bulk from an uploaded file, removed individually, and the
//! whole group is handed to a save collaborator when the user commits.
//!
//! ## Bulk import
//!
//! The importer is chosen by the file's declared MIME type:
//!
//! 1. **Plain text**: one `address,amount` pair per line.
//! 2. **Spreadsheet (xlsx)**: first sheet, with `address` and `amount` header
//!    columns.
//!
//! Other types are ignored. Parsing runs off the UI thread and each file's
//! rows are appended as one ordered batch.

pub mod config;
pub mod domain;
pub mod editor;
pub mod gui;
pub mod import;
pub mod store;

pub use domain::*;
