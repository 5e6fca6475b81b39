//! TUI views
//!
//! The two expense sections and the status bar, with any open dialog drawn on
//! top.

pub mod expenses;
pub mod status_bar;

use ratatui::Frame;

use crate::models::Category;
use crate::storage::SlotStorage;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render<S: SlotStorage>(frame: &mut Frame, app: &App<S>) {
    let layout = AppLayout::new(frame.area());

    expenses::render(frame, app, &Category::Personal, layout.personal);
    expenses::render(frame, app, &Category::Business, layout.business);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog<S: SlotStorage>(frame: &mut Frame, app: &App<S>) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::AddExpense => dialogs::add_expense::render(frame, app),
        ActiveDialog::ConfirmDelete => {
            if let Some(record) = app.selected_record() {
                dialogs::confirm::render(frame, &dialogs::confirm::delete_message(&record));
            }
        }
        ActiveDialog::None => {}
    }
}
