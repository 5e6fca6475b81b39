//! Help dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Expenses"),
        Line::from(""),
        key_line("j/k ↑/↓", "Move selection"),
        key_line("Tab", "Switch between Personal and Business"),
        key_line("a", "Add an expense"),
        key_line("d", "Delete the selected expense"),
        key_line("?", "Show this help"),
        key_line("q", "Quit"),
        Line::from(""),
        heading("Add Dialog"),
        Line::from(""),
        key_line("Tab/Shift+Tab", "Next/previous field"),
        key_line("←/→ Space", "Change type"),
        key_line("Enter", "Save"),
        key_line("Esc", "Cancel"),
        Line::from(""),
        heading("Amount Colors"),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("{:>14}  ", "")),
            Span::raw("under 10  "),
            Span::styled("10 to 99.99  ", Style::default().fg(Color::Green)),
            Span::styled("100 and up", Style::default().fg(Color::Red)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>14}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
