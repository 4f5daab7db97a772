//! Group dialog application

use std::path::PathBuf;

use eframe::egui;
use tracing::{info, warn};

use super::dialog::{render_dialog, DialogAction, DialogTab, DialogView};
use crate::config::Config;
use crate::editor::{CommitOutcome, GroupEditor, RejectReason};
use crate::import::{ImportEvent, ImportWorker};
use crate::store::FileGroupSink;
use crate::Group;

/// Hosts one [`GroupEditor`] in a native window
pub struct GroupDialogApp {
    editor: GroupEditor,
    worker: ImportWorker,
    sink: FileGroupSink,
    config: Config,
    tab: DialogTab,
    status: Option<(String, bool)>,
}

impl GroupDialogApp {
    pub fn new(group: Group, sink: FileGroupSink, config: Config, worker: ImportWorker) -> Self {
        let mut editor = GroupEditor::new();
        editor.open(Some(group));
        Self {
            editor,
            worker,
            sink,
            config,
            tab: DialogTab::default(),
            status: None,
        }
    }

    /// Apply finished imports in the order they completed
    fn drain_imports(&mut self) {
        for event in self.worker.poll() {
            match event {
                ImportEvent::Completed {
                    ticket,
                    session,
                    file_name,
                    batch,
                } => {
                    let kind = batch.kind;
                    let added = self.editor.apply_import(session, batch.rows);
                    info!("Import #{} ({}, {}): {} rows added", ticket, file_name, kind, added);
                    self.status = Some((format!("Added {} rows from {}", added, file_name), false));
                }
                ImportEvent::Failed {
                    session,
                    file_name,
                    error,
                    ..
                } => {
                    if session == self.editor.session() {
                        self.status = Some((format!("Import of {} failed: {}", file_name, error), true));
                    }
                }
            }
        }
    }

    fn pick_file(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("Address lists", self.config.import.accept_extensions.as_slice())
            .pick_file()
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: DialogAction) {
        match action {
            DialogAction::AddEntry => {
                if !self.editor.add_pending_entry() {
                    self.status = Some(("Address is empty".to_string(), true));
                } else {
                    self.status = None;
                }
            }
            DialogAction::Remove(index) => {
                if let Some(removed) = self.editor.remove_at(index) {
                    info!("Removed address {}", removed.address);
                }
            }
            DialogAction::PickFile => {
                if let Some(path) = self.pick_file() {
                    self.worker.submit(path, self.editor.session());
                }
            }
            DialogAction::Save => match self.editor.commit(&mut self.sink) {
                CommitOutcome::Saved => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                CommitOutcome::Rejected(RejectReason::EmptyName) => {
                    self.tab = DialogTab::Info;
                    self.status = Some(("Group name cannot be empty".to_string(), true));
                }
                CommitOutcome::Rejected(reason) => {
                    warn!("Save rejected: {:?}", reason);
                }
                CommitOutcome::Failed(message) => {
                    self.status = Some((format!("Save failed: {}", message), true));
                }
            },
            DialogAction::Cancel => {
                self.editor.cancel();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

impl eframe::App for GroupDialogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_imports();

        let in_flight = self.worker.in_flight();
        let Some(draft) = self.editor.draft_mut() else {
            return;
        };

        let mut view = DialogView {
            draft,
            tab: &mut self.tab,
            status: &self.status,
            imports_in_flight: in_flight,
        };

        if let Some(action) = render_dialog(ctx, &mut view) {
            self.handle_action(ctx, action);
        }
    }
}
