//! Item CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_frequency, parse_item_type};
use crate::config::settings::Settings;
use crate::display::{format_item_details, format_item_list};
use crate::error::PlannerResult;
use crate::services::{ItemChanges, ItemFilter, ItemService, NewItem};
use crate::storage::Storage;

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add a new item
    Add {
        /// Item name
        name: String,
        /// Amount (e.g. "900", "12,50" or "1.234,56")
        amount: String,
        /// Type: fixed, optional, debt or savings
        #[arg(short = 't', long = "type", default_value = "fixed")]
        item_type: String,
        /// Category (defaults to "Overig")
        #[arg(short, long, default_value = "")]
        category: String,
        /// Frequency: monthly, weekly, yearly or once
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// Anchor date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form note
        #[arg(short, long, default_value = "")]
        note: String,
    },
    /// List items
    List {
        /// Only items whose name, category or note contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Only items of this type
        #[arg(short = 't', long = "type")]
        item_type: Option<String>,
        /// Include inactive items
        #[arg(short, long)]
        all: bool,
    },
    /// Show item details
    Show {
        /// Item name or ID
        item: String,
    },
    /// Edit an item
    Edit {
        /// Item name or ID
        item: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short = 't', long = "type")]
        item_type: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        frequency: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Remove an item
    #[command(alias = "rm")]
    Remove {
        /// Item name or ID
        item: String,
    },
    /// Switch an item between active and inactive
    Toggle {
        /// Item name or ID
        item: String,
    },
}

/// Handle an item command
pub fn handle_item_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ItemCommands,
) -> PlannerResult<()> {
    let service = ItemService::new(storage);
    let money = settings.money_format();

    match cmd {
        ItemCommands::Add {
            name,
            amount,
            item_type,
            category,
            frequency,
            date,
            note,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let item = service.create(NewItem {
                name,
                item_type: parse_item_type(&item_type)?,
                category,
                amount: parse_amount(&amount),
                frequency: parse_frequency(&frequency)?,
                date,
                note,
            })?;

            println!("Added item: {}", item.name);
            println!(
                "  {} / {} / {}",
                item.item_type.label(),
                item.category,
                item.frequency.label()
            );
            println!("  Amount: {}", money.format(item.amount));
            println!("  ID: {}", item.id.short());
        }

        ItemCommands::List {
            search,
            item_type,
            all,
        } => {
            let filter = ItemFilter {
                query: search,
                item_type: item_type.as_deref().map(parse_item_type).transpose()?,
                include_inactive: all,
            };
            let items = service.list(&filter)?;
            println!("{}", format_item_list(&items, &money));
        }

        ItemCommands::Show { item } => {
            let found = service.find(&item)?;
            print!("{}", format_item_details(&found, &money));
        }

        ItemCommands::Edit {
            item,
            name,
            item_type,
            category,
            amount,
            frequency,
            date,
            note,
        } => {
            let changes = ItemChanges {
                name,
                item_type: item_type.as_deref().map(parse_item_type).transpose()?,
                category,
                amount: amount.as_deref().map(parse_amount),
                frequency: frequency.as_deref().map(parse_frequency).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                note,
                active: None,
            };

            if changes.is_empty() {
                println!("No changes specified. Use --help to see the fields you can edit.");
                return Ok(());
            }

            let updated = service.update(&item, changes)?;
            println!("Updated item: {}", updated.name);
        }

        ItemCommands::Remove { item } => {
            let removed = service.delete(&item)?;
            println!("Removed item: {}", removed.name);
        }

        ItemCommands::Toggle { item } => {
            let toggled = service.toggle(&item)?;
            println!(
                "{} is now {}",
                toggled.name,
                if toggled.active { "active" } else { "inactive" }
            );
        }
    }

    Ok(())
}
