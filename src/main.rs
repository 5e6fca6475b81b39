use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use iexpense::audit::AuditLogger;
use iexpense::cli::{
    handle_add_command, handle_delete_command, handle_export_command, handle_history_command,
    handle_list_command, AddArgs, DeleteArgs, ExportArgs, HistoryArgs, ListArgs,
};
use iexpense::config::{ExpensePaths, Settings};
use iexpense::logging::{self, LogTarget};
use iexpense::storage::{FileSlots, MemorySlots, SlotStorage};
use iexpense::store::ExpenseStore;
use iexpense::tui::{run_tui, App};

#[derive(Parser)]
#[command(
    name = "iexpense",
    version,
    about = "Track personal and business expenses from the terminal",
    long_about = "iExpense keeps a single list of expenses, shown as Personal and \
                  Business sections. Amounts are colored by size: under 10 plain, \
                  under 100 green, 100 and up red."
)]
struct Cli {
    /// Keep expenses in memory only; nothing is saved
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this directory instead of the default data directory
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expenses(ExpenseCommands),

    /// Show recent additions and deletions
    History(HistoryArgs),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

/// Commands that work on the expense store
#[derive(Subcommand)]
enum ExpenseCommands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Add an expense
    Add(AddArgs),

    /// List expenses by section
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete expenses by row number
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Export all expenses to a file
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match &cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir.clone()),
        None => ExpensePaths::new()?,
    };

    let command = cli
        .command
        .unwrap_or(Commands::Expenses(ExpenseCommands::Tui));

    // The TUI owns the terminal, so it logs to a file; ephemeral sessions write nothing
    match command {
        Commands::Expenses(ExpenseCommands::Tui) if cli.ephemeral => {}
        Commands::Expenses(ExpenseCommands::Tui) => {
            logging::init(LogTarget::File(paths.log_file()), cli.verbose)
        }
        _ => logging::init(LogTarget::Stderr, cli.verbose),
    }

    let settings = Settings::load(&paths)?;
    let color = !cli.no_color && std::io::stdout().is_terminal();

    match command {
        Commands::Expenses(cmd) if cli.ephemeral => {
            let store = ExpenseStore::open(MemorySlots::new(), &settings.slot_key);
            run_expense_command(store, cmd, &settings, color)?;
        }
        Commands::Expenses(cmd) => {
            let mut store = ExpenseStore::open(FileSlots::new(paths.data_dir()), &settings.slot_key);
            if settings.audit_enabled {
                store = store.with_audit(AuditLogger::new(paths.audit_log()));
            }
            run_expense_command(store, cmd, &settings, color)?;
        }
        Commands::History(args) => {
            handle_history_command(&AuditLogger::new(paths.audit_log()), args)?;
        }
        Commands::Init => {
            println!("Initializing iExpense at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'iexpense add <name> <amount>' to record an expense.");
            println!("Run 'iexpense' to launch the interactive interface.");
        }
        Commands::Config => show_config(&paths, &settings),
    }

    Ok(())
}

fn run_expense_command<S: SlotStorage>(
    mut store: ExpenseStore<S>,
    cmd: ExpenseCommands,
    settings: &Settings,
    color: bool,
) -> Result<()> {
    match cmd {
        ExpenseCommands::Tui => {
            let mut app = App::new(store, settings);
            run_tui(&mut app)?;
        }
        ExpenseCommands::Add(args) => handle_add_command(&mut store, settings, args)?,
        ExpenseCommands::List(args) => handle_list_command(&store, args, color)?,
        ExpenseCommands::Delete(args) => handle_delete_command(&mut store, args)?,
        ExpenseCommands::Export(args) => handle_export_command(store.records(), args)?,
    }
    Ok(())
}

fn show_config(paths: &ExpensePaths, settings: &Settings) {
    let slots = FileSlots::new(paths.data_dir());

    println!("iExpense Configuration");
    println!("======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    match slots.slot_path(&settings.slot_key) {
        Ok(path) => println!("Expense list:     {}", path.display()),
        Err(e) => println!("Expense list:     {}", e),
    }
    println!("Audit log:        {}", paths.audit_log().display());
    println!("Log file:         {}", paths.log_file().display());
    println!("Initialized:      {}", paths.is_initialized());
    println!();
    println!("Settings:");
    println!("  Default currency: {}", settings.default_currency_code);
    println!("  Audit enabled:    {}", settings.audit_enabled);
    println!("  Slot name:        {}", settings.slot_key);
}
