//! Add expense dialog
//!
//! Modal form with name, category, amount and currency fields. The category
//! is a toggle between the two displayed sections rather than free text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::ExpenseResult;
use crate::models::{parse_amount, Category, ExpenseRecord};
use crate::storage::SlotStorage;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddExpenseField {
    #[default]
    Name,
    Category,
    Amount,
    Currency,
}

impl AddExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Currency,
            Self::Currency => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Currency,
            Self::Category => Self::Name,
            Self::Amount => Self::Category,
            Self::Currency => Self::Amount,
        }
    }
}

/// State for the add expense dialog
#[derive(Debug, Clone)]
pub struct AddExpenseFormState {
    pub focused_field: AddExpenseField,
    pub name_input: TextInput,
    pub category: Category,
    pub amount_input: TextInput,
    pub currency_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for AddExpenseFormState {
    fn default() -> Self {
        Self::new(Category::Personal, "USD")
    }
}

impl AddExpenseFormState {
    /// Create an empty form
    pub fn new(category: Category, default_currency: &str) -> Self {
        let mut state = Self {
            focused_field: AddExpenseField::Name,
            name_input: TextInput::new().label("Name").placeholder("e.g. Coffee"),
            category,
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            currency_input: TextInput::new()
                .label("Currency")
                .placeholder(default_currency)
                .content(default_currency),
            error_message: None,
        };
        state.update_focus();
        state
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: AddExpenseField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.name_input.focused = self.focused_field == AddExpenseField::Name;
        self.amount_input.focused = self.focused_field == AddExpenseField::Amount;
        self.currency_input.focused = self.focused_field == AddExpenseField::Currency;
    }

    /// The focused text input; the category field has none
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            AddExpenseField::Name => Some(&mut self.name_input),
            AddExpenseField::Category => None,
            AddExpenseField::Amount => Some(&mut self.amount_input),
            AddExpenseField::Currency => Some(&mut self.currency_input),
        }
    }

    /// Switch between Personal and Business
    pub fn toggle_category(&mut self) {
        self.category = self.category.toggled();
    }

    /// Build a record from the form
    ///
    /// Only the amount is checked. An empty currency falls back to the
    /// placeholder, which holds the default currency.
    pub fn build_record(&self) -> ExpenseResult<ExpenseRecord> {
        let amount = parse_amount(self.amount_input.value())?;

        let currency = self.currency_input.value().trim();
        let currency = if currency.is_empty() {
            self.currency_input.placeholder.clone()
        } else {
            currency.to_uppercase()
        };

        Ok(ExpenseRecord::new(
            self.name_input.value(),
            self.category.clone(),
            amount,
            currency,
        ))
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add expense dialog
pub fn render<S: SlotStorage>(frame: &mut Frame, app: &App<S>) {
    let form = &app.add_form;
    let area = centered_rect_fixed(56, 11, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Currency
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&form.name_input, chunks[0]);
    render_category_field(frame, form, chunks[1]);
    frame.render_widget(&form.amount_input, chunks[2]);
    frame.render_widget(&form.currency_input, chunks[3]);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Type  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Render the category toggle, highlighting the chosen value
fn render_category_field(frame: &mut Frame, form: &AddExpenseFormState, area: Rect) {
    let focused = form.focused_field == AddExpenseField::Category;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("{:>10}: ", "Type"), label_style)];
    for option in Category::SECTIONS {
        let style = match (option == form.category, focused) {
            (true, true) => Style::default().fg(Color::Black).bg(Color::Cyan),
            (true, false) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {} ", option), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle a key while the add dialog is open
pub fn handle_key<S: SlotStorage>(app: &mut App<S>, key: KeyEvent) {
    let form = &mut app.add_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),

        KeyCode::Enter => {
            app.save_new_expense();
        }

        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),

        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            if form.focused_field == AddExpenseField::Category =>
        {
            form.toggle_category();
        }

        code => {
            let Some(input) = form.focused_input() else {
                return;
            };
            match code {
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.insert(c)
                }
                _ => return,
            }
            form.clear_error();
        }
    }
}
