//! Status bar view
//!
//! Section counts, the latest status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Category;
use crate::storage::SlotStorage;
use crate::tui::app::App;

const HINTS: &str = " a:Add  d:Delete  Tab:Section  ?:Help  q:Quit ";

/// Render the status bar
pub fn render<S: SlotStorage>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![Span::styled(
        " iExpense",
        Style::default().fg(Color::Cyan),
    )];

    for category in Category::SECTIONS {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{}: {}", category, app.section_records(&category).len()),
            Style::default().fg(Color::White),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(HINTS.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
