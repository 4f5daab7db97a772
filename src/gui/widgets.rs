//! Small shared widgets

use eframe::egui::{self, Color32, Response, RichText, Ui};

use super::theme::{BG_SELECTED, TEXT_MUTED, TEXT_PRIMARY};

/// Button with `color` text and a faint outline of the same color
pub fn glow_button(ui: &mut Ui, text: impl Into<RichText>, color: Color32) -> Response {
    ui.add(
        egui::Button::new(text.into().color(color))
            .fill(Color32::TRANSPARENT)
            .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.4))),
    )
}

/// Tab header; returns true when clicked
pub fn tab(ui: &mut Ui, label: &str, selected: bool) -> bool {
    let (color, fill) = if selected {
        (TEXT_PRIMARY, BG_SELECTED)
    } else {
        (TEXT_MUTED, Color32::TRANSPARENT)
    };
    ui.add(
        egui::Button::new(RichText::new(label).monospace().color(color))
            .fill(fill)
            .corner_radius(4.0),
    )
    .clicked()
}
