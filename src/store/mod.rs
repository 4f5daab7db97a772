//! Group file storage
//!
//! The dialog hands its finished group to a save collaborator; the binary's
//! collaborator writes the group back to the JSON file it was loaded from.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::info;

use crate::editor::GroupSink;
use crate::Group;

/// Write a file atomically while holding an exclusive lock.
///
/// The lock lives in a sibling `.lock` file so the rename cannot drop it.
/// The parent directory is created when missing.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let lock_path = sibling_with_suffix(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| format!("Failed to acquire lock: {}", lock_path.display()))?;

    let temp_path = sibling_with_suffix(path, "tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content)
        .with_context(|| "Failed to write file content")?;
    temp_file.sync_all().with_context(|| "Failed to sync file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename into place: {}", path.display()))?;

    Ok(())
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// Load a group from a JSON file
pub fn load_group(path: &Path) -> Result<Group> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read group file: {}", path.display()))?;
    let group: Group = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse group file: {}", path.display()))?;
    Ok(group)
}

/// Save a group as pretty-printed JSON
pub fn save_group(path: &Path, group: &Group) -> Result<()> {
    let content = serde_json::to_string_pretty(group).with_context(|| "Failed to serialize group")?;
    write_atomic(path, content.as_bytes())
}

/// Save collaborator that writes the committed group to a JSON file
#[derive(Debug, Clone)]
pub struct FileGroupSink {
    path: PathBuf,
}

impl FileGroupSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GroupSink for FileGroupSink {
    fn save_group(&mut self, group: Group) -> Result<()> {
        save_group(&self.path, &group)?;
        info!(
            "Saved group '{}' ({} addresses) to {}",
            group.name,
            group.addresses.len(),
            self.path.display()
        );
        Ok(())
    }
}
