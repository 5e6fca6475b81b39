//! Expense CLI commands
//!
//! `add`, `list` and `delete`. Row numbers given to `delete` are the numbers
//! printed by `list`, i.e. positions within one section.

use std::collections::BTreeSet;

use clap::Args;

use crate::config::Settings;
use crate::display::{format_currency, format_section, format_sections};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount, Category, CategoryParseError, ExpenseRecord};
use crate::storage::SlotStorage;
use crate::store::ExpenseStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Expense name
    pub name: String,

    /// Amount (e.g. "4.50"; zero and negative values are accepted)
    #[arg(allow_negative_numbers = true)]
    pub amount: String,

    /// Category (personal or business)
    #[arg(short, long, default_value = "Personal", value_parser = parse_category)]
    pub category: Category,

    /// Currency code (defaults to the configured currency)
    #[arg(long)]
    pub currency: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show one section (personal or business)
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<Category>,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Row numbers as shown by `list`
    #[arg(required = true)]
    pub rows: Vec<usize>,

    /// Section the rows belong to (personal or business)
    #[arg(
        short,
        long,
        value_parser = parse_category,
        required_unless_present = "position",
        conflicts_with = "position"
    )]
    pub section: Option<Category>,

    /// Treat the numbers as positions in the full list instead of section rows
    #[arg(long)]
    pub position: bool,

    /// Delete without previewing first
    #[arg(short, long)]
    pub force: bool,
}

/// Parse a category typed by the user
///
/// Only the two displayed sections are accepted, case-insensitively. Stored
/// tags outside them can't be created from the command line.
pub fn parse_category(input: &str) -> Result<Category, CategoryParseError> {
    input.parse()
}

/// Handle `add`
pub fn handle_add_command<S: SlotStorage>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let amount = parse_amount(&args.amount)?;
    let currency_code = args
        .currency
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| settings.default_currency_code.clone());

    let record = ExpenseRecord::new(args.name, args.category, amount, currency_code);
    let summary = format!(
        "Added {} expense: {} {}",
        record.category,
        record.name,
        format_currency(record.amount, &record.currency_code)
    );
    let id = record.id;

    store.add(record)?;
    println!("{}", summary);
    println!("  ID: {}", id);
    Ok(())
}

/// Handle `list`
pub fn handle_list_command<S: SlotStorage>(
    store: &ExpenseStore<S>,
    args: ListArgs,
    color: bool,
) -> ExpenseResult<()> {
    let output = match args.category {
        Some(category) => format_section(&category, store.records(), color),
        None => format_sections(store.records(), color),
    };
    print!("{}", output);
    Ok(())
}

/// Handle `delete`
pub fn handle_delete_command<S: SlotStorage>(
    store: &mut ExpenseStore<S>,
    args: DeleteArgs,
) -> ExpenseResult<()> {
    let positions = resolve_positions(store, &args)?;

    if !args.force {
        println!("Would delete {} expense(s):", positions.len());
        for &position in &positions {
            if let Some(record) = store.get(position) {
                println!("  {}", record);
            }
        }
        println!();
        println!("Run again with --force to delete.");
        return Ok(());
    }

    let removed = store.remove_at(positions)?;
    println!("Deleted {} expense(s):", removed.len());
    for record in &removed {
        println!("  {}", record);
    }
    Ok(())
}

/// Map the requested numbers to positions in the full list
///
/// Every number is range-checked here, so the preview fails the same way the
/// real deletion would.
fn resolve_positions<S: SlotStorage>(
    store: &ExpenseStore<S>,
    args: &DeleteArgs,
) -> ExpenseResult<BTreeSet<usize>> {
    if args.position {
        let len = store.len();
        let positions: BTreeSet<usize> = args.rows.iter().copied().collect();
        if let Some(&position) = positions.range(len..).next() {
            return Err(ExpenseError::InvalidPosition { position, len });
        }
        return Ok(positions);
    }

    let section = args.section.as_ref().ok_or_else(|| {
        ExpenseError::Validation("--section is required unless --position is given".into())
    })?;
    store.section_positions(section.as_str(), args.rows.iter().copied())
}
