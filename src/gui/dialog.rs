//! "Manage group" dialog rendering
//!
//! Rendering only reads and binds the draft; anything that changes the
//! editor state is returned as a [`DialogAction`] and applied by the app.

use eframe::egui::{self, RichText, ScrollArea};

use super::theme::{
    ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use super::widgets::{glow_button, tab};
use crate::editor::Draft;

/// Dialog tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogTab {
    #[default]
    Info,
    Addresses,
}

/// User intents raised while rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    AddEntry,
    /// Row index in the draft list
    Remove(usize),
    PickFile,
    Save,
    Cancel,
}

/// State bound by the dialog widgets
pub struct DialogView<'a> {
    pub draft: &'a mut Draft,
    pub tab: &'a mut DialogTab,
    /// Last status line, `(message, is_error)`
    pub status: &'a Option<(String, bool)>,
    pub imports_in_flight: usize,
}

/// Render the dialog body and footer
pub fn render_dialog(ctx: &egui::Context, view: &mut DialogView<'_>) -> Option<DialogAction> {
    let mut action = None;

    egui::TopBottomPanel::bottom("group_dialog_footer")
        .frame(egui::Frame::NONE.fill(super::theme::BG_PRIMARY).inner_margin(12.0))
        .show(ctx, |ui| {
            if let Some((msg, is_error)) = view.status {
                let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
                ui.label(RichText::new(msg.as_str()).color(color));
                ui.add_space(6.0);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if glow_button(ui, "Save", ACCENT_GREEN).clicked() {
                    action = Some(DialogAction::Save);
                }
                ui.add_space(8.0);
                if glow_button(ui, "Cancel", TEXT_DIM).clicked() {
                    action = Some(DialogAction::Cancel);
                }
            });
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(super::theme::BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.label(
                RichText::new("MANAGE GROUP")
                    .monospace()
                    .size(18.0)
                    .color(TEXT_PRIMARY),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if tab(ui, "Info", *view.tab == DialogTab::Info) {
                    *view.tab = DialogTab::Info;
                }
                if tab(ui, "Addresses", *view.tab == DialogTab::Addresses) {
                    *view.tab = DialogTab::Addresses;
                }
            });
            ui.separator();
            ui.add_space(8.0);

            let current = *view.tab;
            let tab_action = match current {
                DialogTab::Info => {
                    render_info_tab(ui, view.draft);
                    None
                }
                DialogTab::Addresses => render_addresses_tab(ui, view),
            };
            if tab_action.is_some() {
                action = tab_action;
            }
        });

    action
}

fn render_info_tab(ui: &mut egui::Ui, draft: &mut Draft) {
    ui.label(RichText::new("Group name").color(TEXT_MUTED));
    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(&mut draft.name)
            .font(egui::TextStyle::Monospace)
            .text_color(TEXT_PRIMARY)
            .hint_text("Enter a group name")
            .desired_width(f32::INFINITY),
    );
}

fn render_addresses_tab(ui: &mut egui::Ui, view: &mut DialogView<'_>) -> Option<DialogAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut view.draft.pending_address)
                .font(egui::TextStyle::Monospace)
                .text_color(TEXT_PRIMARY)
                .hint_text("Address")
                .desired_width(240.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut view.draft.pending_amount)
                .font(egui::TextStyle::Monospace)
                .text_color(TEXT_PRIMARY)
                .hint_text("Amount (optional)")
                .desired_width(140.0),
        );
        if glow_button(ui, "Add", ACCENT_CYAN).clicked() {
            action = Some(DialogAction::AddEntry);
        }
    });
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        if glow_button(ui, "Import file…", TEXT_DIM).clicked() {
            action = Some(DialogAction::PickFile);
        }
        if view.imports_in_flight > 0 {
            ui.spinner();
            ui.label(
                RichText::new(format!("Importing {} file(s)", view.imports_in_flight))
                    .small()
                    .color(TEXT_MUTED),
            );
        }
    });
    ui.add_space(8.0);

    ScrollArea::vertical()
        .max_height(200.0)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, addr) in view.draft.addresses.iter().enumerate() {
                egui::Frame::new()
                    .fill(BG_SECONDARY)
                    .inner_margin(8.0)
                    .corner_radius(6.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{}. {}", index + 1, addr.address))
                                        .monospace()
                                        .color(TEXT_PRIMARY),
                                );
                                if !addr.description.is_empty() {
                                    ui.label(
                                        RichText::new(format!("Amount: {}", addr.description))
                                            .small()
                                            .color(TEXT_MUTED),
                                    );
                                }
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if glow_button(ui, "Delete", ACCENT_RED)
                                        .clicked()
                                    {
                                        action = Some(DialogAction::Remove(index));
                                    }
                                },
                            );
                        });
                    });
                ui.add_space(4.0);
            }
        });

    action
}
