//! Event handler for the TUI
//!
//! Routes key events to the open dialog or to the section view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::storage::SlotStorage;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<S: SlotStorage>(app: &mut App<S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<S: SlotStorage>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_section(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('d') | KeyCode::Delete => app.open_dialog(ActiveDialog::ConfirmDelete),
        _ => {}
    }

    Ok(())
}

fn handle_dialog_key<S: SlotStorage>(app: &mut App<S>, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::ConfirmDelete => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                app.delete_selected();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::AddExpense => dialogs::add_expense::handle_key(app, key),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Category, ExpenseRecord};
    use crate::storage::MemorySlots;
    use crate::store::{ExpenseStore, DEFAULT_SLOT_KEY};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App<MemorySlots>, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
        app.drain_notifications();
    }

    fn type_text(app: &mut App<MemorySlots>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app() -> App<MemorySlots> {
        App::new(
            ExpenseStore::open(MemorySlots::new(), DEFAULT_SLOT_KEY),
            &Settings::default(),
        )
    }

    #[test]
    fn test_add_business_expense_with_keys() {
        let mut app = new_app();

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Hosting");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "12.5");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        let business = app.section_records(&Category::Business);
        assert_eq!(business.len(), 1);
        assert_eq!(business[0].name, "Hosting");
        assert_eq!(business[0].amount, 12.5);
    }

    #[test]
    fn test_q_inside_dialog_is_text_not_quit() {
        let mut app = new_app();

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "qq");
        assert!(!app.should_quit);
        assert_eq!(app.add_form.name_input.value(), "qq");

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert!(app.store.is_empty());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut app = new_app();
        app.store
            .add(ExpenseRecord::new("Coffee", Category::Personal, 4.5, "USD")).unwrap();

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.store.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Deleted 'Coffee'"));
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = new_app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        handle_event(&mut app, Event::Key(key)).unwrap();
        assert!(!app.should_quit);
    }
}
