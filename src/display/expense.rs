//! Expense list formatting
//!
//! Renders the Personal and Business sections for the `list` command. Row
//! numbers are positions within a section, which is what `delete` takes.

use crossterm::style::Stylize;

use crate::models::{Category, ExpenseRecord};

use super::amount::{format_currency, AmountTier};

const NAME_WIDTH: usize = 24;
const AMOUNT_WIDTH: usize = 14;

/// Format one row of a section
pub fn format_expense_row(row: usize, record: &ExpenseRecord, color: bool) -> String {
    let amount = format!(
        "{:>width$}",
        format_currency(record.amount, &record.currency_code),
        width = AMOUNT_WIDTH
    );

    let amount = if color {
        let tier = AmountTier::for_amount(record.amount);
        amount.with(tier.term_color()).bold().italic().to_string()
    } else {
        amount
    };

    format!(
        "{:>4}  {}  {:10} {}",
        row,
        truncate(&record.name, NAME_WIDTH),
        record.category.as_str(),
        amount
    )
}

/// Format the section for `category`, taken from the full list
pub fn format_section(category: &Category, records: &[ExpenseRecord], color: bool) -> String {
    let section: Vec<&ExpenseRecord> = records
        .iter()
        .filter(|record| record.in_category(category.as_str()))
        .collect();

    let mut output = String::new();
    let header = format!("{} ({})", category, section.len());
    if color {
        output.push_str(&header.bold().to_string());
    } else {
        output.push_str(&header);
    }
    output.push('\n');

    if section.is_empty() {
        output.push_str("  No expenses.\n");
        return output;
    }

    output.push_str(&format!(
        "{:>4}  {:width$}  {:10} {:>amount$}\n",
        "#",
        "Name",
        "Type",
        "Amount",
        width = NAME_WIDTH,
        amount = AMOUNT_WIDTH
    ));
    output.push_str(&"-".repeat(4 + 2 + NAME_WIDTH + 2 + 10 + 1 + AMOUNT_WIDTH));
    output.push('\n');

    for (row, record) in section.into_iter().enumerate() {
        output.push_str(&format_expense_row(row, record, color));
        output.push('\n');
    }

    output
}

/// Format both displayed sections
pub fn format_sections(records: &[ExpenseRecord], color: bool) -> String {
    Category::SECTIONS
        .iter()
        .map(|category| format_section(category, records, color))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pad or cut `s` to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new("Coffee", Category::Personal, 4.5, "USD"),
            ExpenseRecord::new("Hosting", Category::Business, 12.0, "USD"),
            ExpenseRecord::new("Flights", Category::Other("Travel".into()), 300.0, "USD"),
            ExpenseRecord::new("Rent", Category::Personal, 950.0, "EUR"),
        ]
    }

    #[test]
    fn test_section_rows_are_numbered_within_section() {
        let output = format_section(&Category::Personal, &sample(), false);

        assert!(output.starts_with("Personal (2)\n"));
        let rows: Vec<&str> = output.lines().skip(3).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].trim_start().starts_with("0  Coffee"));
        assert!(rows[1].trim_start().starts_with("1  Rent"));
        assert!(rows[1].ends_with("€950.00"));
    }

    #[test]
    fn test_other_categories_are_not_listed() {
        let output = format_sections(&sample(), false);

        assert!(output.contains("Personal (2)"));
        assert!(output.contains("Business (1)"));
        assert!(!output.contains("Flights"));
    }

    #[test]
    fn test_empty_section() {
        let output = format_section(&Category::Business, &[], false);
        assert_eq!(output, "Business (0)\n  No expenses.\n");
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let output = format_sections(&sample(), false);
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_colored_output_styles_amounts() {
        let record = ExpenseRecord::new("Hosting", Category::Business, 12.0, "USD");
        let output = format_expense_row(0, &record, true);
        assert!(output.contains('\u{1b}'));
        assert!(output.contains("$12.00"));
    }

    #[test]
    fn test_truncate_is_char_aware() {
        assert_eq!(truncate("abc", 5), "abc  ");
        assert_eq!(truncate("Café au lait grande", 10), "Café au...");
        assert_eq!(truncate("ééééé", 5), "ééééé");
    }
}
