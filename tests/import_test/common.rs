//! Shared fixtures for import tests

use std::path::PathBuf;

use tempfile::TempDir;

use address_groups::import::{ImportError, TabularParser, TabularRow};

/// Tabular backend returning canned rows regardless of input
pub struct FakeTabular(pub Vec<Vec<(&'static str, &'static str)>>);

impl TabularParser for FakeTabular {
    fn parse_tabular(&self, _bytes: &[u8]) -> Result<Vec<TabularRow>, ImportError> {
        Ok(self
            .0
            .iter()
            .map(|row| {
                row.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .collect())
    }
}

/// Write `content` to `name` inside a fresh temp dir
pub fn write_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    (dir, path)
}
