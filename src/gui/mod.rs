//! Native window for the "manage group" dialog
//!
//! Two tabs: the group name, and the address list with manual entry and
//! file import. Save hands the group to the file sink; Cancel discards it.

pub mod app;
pub mod dialog;
pub mod runner;
pub mod theme;
mod widgets;

pub use app::GroupDialogApp;
pub use dialog::{DialogAction, DialogTab};
pub use runner::run_gui;
