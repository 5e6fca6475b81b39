//! Application state for the TUI
//!
//! The App owns the store. Store notifications arrive on a channel and are
//! drained once per loop iteration; rendering always reads the store directly.

use std::sync::mpsc::{self, Receiver};

use crate::config::Settings;
use crate::models::{Category, ExpenseRecord};
use crate::storage::SlotStorage;
use crate::store::{ExpenseStore, StoreEvent};

use super::dialogs::add_expense::AddExpenseFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    ConfirmDelete,
    Help,
}

/// Main application state
pub struct App<S: SlotStorage> {
    /// The expense store
    pub store: ExpenseStore<S>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Section that receives navigation keys
    pub focused_section: Category,

    /// Selected row in the Personal section
    pub personal_index: usize,

    /// Selected row in the Business section
    pub business_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add dialog state
    pub add_form: AddExpenseFormState,

    /// Currency pre-filled in the add dialog
    default_currency: String,

    /// Store notifications, filled by the subscription made in `new`
    notifications: Receiver<StoreEvent>,
}

impl<S: SlotStorage> App<S> {
    /// Create a new App around `store`
    pub fn new(mut store: ExpenseStore<S>, settings: &Settings) -> Self {
        let (sender, notifications) = mpsc::channel();
        store.subscribe(move |event, _records| {
            let _ = sender.send(event.clone());
        });

        Self {
            store,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            focused_section: Category::Personal,
            personal_index: 0,
            business_index: 0,
            status_message: None,
            add_form: AddExpenseFormState::new(Category::Personal, &settings.default_currency_code),
            default_currency: settings.default_currency_code.clone(),
            notifications,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Records shown in `category`'s section, in list order
    pub fn section_records(&self, category: &Category) -> Vec<ExpenseRecord> {
        self.store.by_category(category.as_str())
    }

    /// Selected row within `category`'s section
    pub fn selected_row(&self, category: &Category) -> usize {
        match category {
            Category::Business => self.business_index,
            _ => self.personal_index,
        }
    }

    fn selected_row_mut(&mut self) -> &mut usize {
        match self.focused_section {
            Category::Business => &mut self.business_index,
            _ => &mut self.personal_index,
        }
    }

    /// The selected record in the focused section
    pub fn selected_record(&self) -> Option<ExpenseRecord> {
        let row = self.selected_row(&self.focused_section);
        self.section_records(&self.focused_section).into_iter().nth(row)
    }

    /// Move focus to the other section
    pub fn toggle_section(&mut self) {
        self.focused_section = self.focused_section.toggled();
    }

    /// Move selection up in the focused section
    pub fn move_up(&mut self) {
        let row = self.selected_row_mut();
        *row = row.saturating_sub(1);
    }

    /// Move selection down in the focused section
    pub fn move_down(&mut self) {
        let len = self.section_records(&self.focused_section).len();
        let row = self.selected_row_mut();
        if *row + 1 < len {
            *row += 1;
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddExpense => {
                self.add_form =
                    AddExpenseFormState::new(self.focused_section.clone(), &self.default_currency);
            }
            ActiveDialog::ConfirmDelete if self.selected_record().is_none() => {
                self.set_status("Nothing to delete");
                return;
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Add the record described by the add form
    ///
    /// On invalid input the dialog stays open with the error shown.
    pub fn save_new_expense(&mut self) -> bool {
        match self
            .add_form
            .build_record()
            .and_then(|record| self.store.add(record))
        {
            Ok(()) => {
                self.close_dialog();
                true
            }
            Err(e) => {
                self.add_form.set_error(e.to_string());
                false
            }
        }
    }

    /// Delete the selected record of the focused section
    pub fn delete_selected(&mut self) {
        let row = self.selected_row(&self.focused_section);
        let result = self
            .store
            .section_positions(self.focused_section.as_str(), [row])
            .and_then(|positions| self.store.remove_at(positions));

        if let Err(e) = result {
            self.set_status(format!("Delete failed: {}", e));
        }
    }

    /// Apply pending store notifications
    pub fn drain_notifications(&mut self) {
        while let Ok(event) = self.notifications.try_recv() {
            let message = match &event {
                StoreEvent::Added { record, .. } => {
                    format!("Added '{}' to {}", record.name, record.category)
                }
                StoreEvent::Removed { removed } => match removed.as_slice() {
                    [(_, record)] => format!("Deleted '{}'", record.name),
                    _ => format!("Deleted {} expenses", removed.len()),
                },
            };
            self.set_status(message);
        }
        self.clamp_selection();
    }

    /// Keep each section's selection inside the section
    fn clamp_selection(&mut self) {
        let personal = self.section_records(&Category::Personal).len();
        let business = self.section_records(&Category::Business).len();
        self.personal_index = self.personal_index.min(personal.saturating_sub(1));
        self.business_index = self.business_index.min(business.saturating_sub(1));
    }
}
