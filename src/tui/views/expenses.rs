//! Expense section view
//!
//! One bordered table per category. Only the focused section shows a selected
//! row.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{format_currency, AmountTier};
use crate::models::Category;
use crate::storage::SlotStorage;
use crate::tui::app::App;

/// Render the section for `category`
pub fn render<S: SlotStorage>(frame: &mut Frame, app: &App<S>, category: &Category, area: Rect) {
    let records = app.section_records(category);
    let is_focused = app.focused_section == *category;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" {} ({}) ", category, records.len()))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if records.is_empty() {
        let text = Paragraph::new("No expenses. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(4),  // Row
        Constraint::Min(12),    // Name
        Constraint::Length(16), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Name"),
        Cell::from(Line::from("Amount").alignment(Alignment::Right)),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let amount_style = Style::default()
                .fg(AmountTier::for_amount(record.amount).ui_color())
                .add_modifier(Modifier::BOLD | Modifier::ITALIC);
            let amount = Line::from(Span::styled(
                format_currency(record.amount, &record.currency_code),
                amount_style,
            ))
            .alignment(Alignment::Right);

            Row::new(vec![
                Cell::from(row.to_string()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(record.name.clone()),
                Cell::from(amount),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_row(category)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
