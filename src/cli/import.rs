//! Import command implementation

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use address_groups::config::Config;
use address_groups::import::{read_and_import, CalamineParser};

/// Parse a file the way the dialog would and print the rows as JSON
pub async fn import_command(file: &Path, mime: Option<&str>, config: &Config) -> Result<()> {
    let batch = read_and_import(file, mime, &config.import, Arc::new(CalamineParser)).await?;

    eprintln!("{}", batch.summary());
    println!("{}", serde_json::to_string_pretty(&batch.rows)?);
    Ok(())
}
