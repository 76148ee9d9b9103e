use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_report::cli::{
    handle_budget_command, handle_category_command, handle_report_command,
    handle_transaction_command, handle_user_command,
};
use expense_report::config::{paths::ReportPaths, settings::Settings};
use expense_report::logging::init_tracing;
use expense_report::storage::{init::default_category_names, initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "expense-report",
    author = "Kaylee Beyene",
    version,
    about = "Monthly expense report generation and delivery",
    long_about = "expense-report aggregates recorded income and expense transactions \
                  into a monthly spreadsheet report (summary, transactions, category \
                  breakdown and budget vs actual) that can be saved or emailed."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize storage and the default category catalog
    Init,

    /// Show current configuration and paths
    Config,

    /// User management commands
    #[command(subcommand)]
    User(expense_report::cli::UserCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(expense_report::cli::CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(expense_report::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(expense_report::cli::BudgetCommands),

    /// Monthly report commands
    #[command(subcommand)]
    Report(expense_report::cli::ReportCommands),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ReportPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing expense-report at: {}", paths.base_dir().display());
            let created = initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            if created {
                println!();
                println!("Default categories have been created:");
                for name in default_category_names() {
                    println!("  - {}", name);
                }
            }
            println!();
            println!("Run 'expense-report user add <email>' to register a user.");
        }
        Some(Commands::Config) => {
            println!("expense-report Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Outbox directory: {}", paths.outbox_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Totals mode:     {:?}", settings.totals_mode);
            println!("  Ledger limit:    {}", settings.ledger_limit);
            println!("  Sender address:  {}", settings.sender_address);
            println!("  Default format:  {}", settings.default_format);
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&storage, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        None => {
            println!("expense-report - Monthly expense reports");
            println!();
            println!("Run 'expense-report --help' for usage information.");
        }
    }

    Ok(())
}
