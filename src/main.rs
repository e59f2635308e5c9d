use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use finance_tracker::cli::{
    handle_budget_command, handle_export_command, handle_report_command,
    handle_transaction_command, BudgetCommands, ExportFormat, ReportCommands, TransactionCommands,
};
use finance_tracker::config::{paths::DATA_DIR_ENV, FinancePaths, Settings};
use finance_tracker::display::category::format_category_catalog;
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Track income and expenses, set monthly budgets and see where the money goes",
    long_about = "fintrack records income and expense transactions, keeps a monthly \
                  budget per category and reports on spending: monthly totals, \
                  category breakdowns, budget vs. actual and short insights."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// List the suggested categories
    Categories,

    /// Export data
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Categories) => print!("{}", format_category_catalog()),
        Some(Commands::Export {
            format,
            output,
            pretty,
        }) => handle_export_command(&storage, format, output, pretty)?,
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("(override with {})", DATA_DIR_ENV);
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent count:    {}", settings.recent_count);
            println!();
            println!("Stored:");
            println!("  Transactions: {}", storage.transactions.count()?);
            println!("  Budgets:      {}", storage.budgets.count()?);
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack report summary' for an overview.");
        }
    }

    Ok(())
}
