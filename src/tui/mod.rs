//! Terminal User Interface module
//!
//! A ratatui front end showing the Personal and Business sections, with
//! dialogs for adding and deleting expenses.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
