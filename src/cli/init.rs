//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

use address_groups::config::Config;

/// Default configuration content for `addrgroups init`
pub const DEFAULT_CONFIG: &str = r#"# Address groups configuration
# ============================

# Bulk import. The importer is picked by the file's declared MIME type;
# accept_extensions only filters what the file picker shows.
[import]
spreadsheet_mime = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
text_mime = "text/plain"
accept_extensions = ["txt", "xlsx"]

# Dialog window size in points
[gui]
window_width = 600.0
window_height = 480.0
"#;

/// Write the default config into `<work_dir>/.addrgroups/config.toml`
pub fn init_command(work_dir: &Path, force: bool) -> Result<()> {
    let config_path = Config::local_config_path(work_dir);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    info!("Created {}", config_path.display());
    Ok(())
}
