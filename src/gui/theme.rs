//! Dialog colors
//!
//! Same dark palette as the rest of the app: charcoal panels with amber text.

use eframe::egui::Color32;

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(18, 20, 24);
/// Address rows and input panels
pub const BG_SECONDARY: Color32 = Color32::from_rgb(24, 28, 34);
/// Active tab
pub const BG_SELECTED: Color32 = Color32::from_rgb(40, 50, 65);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 176, 0);
pub const TEXT_DIM: Color32 = Color32::from_rgb(180, 130, 50);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 85, 60);

pub const ACCENT_CYAN: Color32 = Color32::from_rgb(0, 255, 200);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(80, 255, 120);
pub const ACCENT_RED: Color32 = Color32::from_rgb(255, 80, 80);
