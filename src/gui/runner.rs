//! GUI runner - opens the group dialog for one group file

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui;
use tokio::runtime::Handle;
use tracing::info;

use super::app::GroupDialogApp;
use crate::config::Config;
use crate::import::{CalamineParser, ImportWorker};
use crate::store::{load_group, FileGroupSink};

/// Run the dialog for the group stored at `group_path`.
///
/// Must be called from within a tokio runtime; imports run on it.
pub fn run_gui(group_path: &Path, config: Config) -> Result<()> {
    let group = load_group(group_path)?;
    let runtime = Handle::try_current().context("GUI must be started inside a tokio runtime")?;

    info!(
        "Editing group '{}' ({} addresses) from {}",
        group.name,
        group.addresses.len(),
        group_path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.gui.window_width, config.gui.window_height])
            .with_min_inner_size([400.0, 320.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let sink = FileGroupSink::new(group_path);
    let title = format!("Manage group - {}", group.name);

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let repaint_ctx = cc.egui_ctx.clone();
            let worker = ImportWorker::new(
                runtime,
                config.import.clone(),
                Arc::new(CalamineParser),
            )
            .with_notify(move || repaint_ctx.request_repaint());

            Ok(Box::new(GroupDialogApp::new(group, sink, config, worker)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
