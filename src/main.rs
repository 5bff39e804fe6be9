use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_planner::cli::{
    handle_agenda_command, handle_breakdown_command, handle_export_command,
    handle_history_command, handle_import_command, handle_income_command, handle_item_command,
    handle_month_command, handle_reset_command, handle_summary_command, ExportFormat,
    IncomeCommands, ItemCommands, MonthCommands,
};
use budget_planner::config::{paths::PlannerPaths, settings::Settings};
use budget_planner::storage::{initialize_storage, LoadOutcome, Storage};

#[derive(Parser)]
#[command(
    name = "planner",
    author = "Kaylee Beyene",
    version,
    about = "Household budget planner for the terminal",
    long_about = "Plan fixed costs, optional spending, debts and savings per month. \
                  Items repeat monthly, weekly or yearly (or happen once); the planner \
                  shows what falls due when and what is left of your income."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and a starting budget
    Init,

    /// Show current configuration and paths
    Config,

    /// Budget item commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Select the month to view
    #[command(subcommand)]
    Month(MonthCommands),

    /// Dashboard for a month
    Summary {
        /// Month as YYYY-MM (defaults to the selected month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Everything that falls due in a month, by date
    Agenda {
        /// Month as YYYY-MM (defaults to the selected month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Amounts per category for a month
    Breakdown {
        /// Month as YYYY-MM (defaults to the selected month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Export the budget (JSON/YAML) or a month's agenda (CSV)
    Export {
        /// Output file path
        output: PathBuf,
        /// Output format (defaults to the file extension, else JSON)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
        /// Month for the CSV agenda (defaults to the selected month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Replace the budget with an exported JSON or YAML file
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Remove all items and the income
    Reset {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match &cli.command {
        Some(Commands::Init) => return run_init(&paths, &settings),
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(());
        }
        _ => {}
    }

    let storage = Storage::new(paths)?;
    // A fresh budget is written right away so item IDs are stable between runs
    if storage.load(settings.seed_examples)? == LoadOutcome::Fresh {
        storage.budget.save()?;
    }

    match cli.command {
        Some(Commands::Init) | Some(Commands::Config) => {}
        Some(Commands::Item(cmd)) => handle_item_command(&storage, &settings, cmd)?,
        Some(Commands::Income(cmd)) => handle_income_command(&storage, &settings, cmd)?,
        Some(Commands::Month(cmd)) => handle_month_command(&storage, cmd)?,
        Some(Commands::Summary { month }) => {
            handle_summary_command(&storage, &settings, month.as_deref())?
        }
        Some(Commands::Agenda { month }) => {
            handle_agenda_command(&storage, &settings, month.as_deref())?
        }
        Some(Commands::Breakdown { month }) => {
            handle_breakdown_command(&storage, &settings, month.as_deref())?
        }
        Some(Commands::Export {
            output,
            format,
            month,
        }) => handle_export_command(&storage, &output, format, month.as_deref())?,
        Some(Commands::Import { file }) => handle_import_command(&storage, &settings, &file)?,
        Some(Commands::Reset { yes }) => handle_reset_command(&storage, yes)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        None => handle_summary_command(&storage, &settings, None)?,
    }

    Ok(())
}

fn run_init(paths: &PlannerPaths, settings: &Settings) -> Result<()> {
    println!("Initializing budget planner at: {}", paths.base_dir().display());
    let created = initialize_storage(paths, settings.seed_examples)?;
    settings.save(paths)?;

    if !created {
        println!("A budget already exists; nothing was changed.");
        return Ok(());
    }

    println!("Initialization complete!");
    if settings.seed_examples {
        println!();
        println!("Example items have been added (Huur, Zorgverzekering, Sparen, Boodschappen).");
        println!("Run 'planner item list' to see them.");
    }
    Ok(())
}

fn print_config(paths: &PlannerPaths, settings: &Settings) {
    println!("Budget Planner Configuration");
    println!("============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Budget file:    {}", paths.budget_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Decimal comma:   {}", settings.decimal_comma);
    println!("  Upcoming count:  {}", settings.upcoming_count);
    println!("  Seed examples:   {}", settings.seed_examples);
}
