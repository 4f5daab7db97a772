//! Core domain types for address groups

mod file;
mod group;

pub use file::{FileKind, UploadedFile, OCTET_STREAM_MIME, SPREADSHEET_MIME, TEXT_MIME};
pub use group::{Address, AddressId, Group, GroupId};
