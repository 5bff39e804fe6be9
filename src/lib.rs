//! Budget planner - household budgeting from the terminal
//!
//! Record recurring and one-off costs, debts and savings contributions, set a
//! monthly income, and see per month what falls due when and what is left.
//!
//! # Architecture
//!
//! - `models`: money, months, budget items and the budget document
//! - `schedule`: recurrence expansion and month aggregation (pure)
//! - `storage`: JSON document storage with atomic writes
//! - `audit`: append-only log of every change
//! - `services`: business logic on top of storage
//! - `export`: JSON, YAML and CSV output, JSON and YAML input
//! - `display`: terminal formatting
//! - `cli`: clap subcommands and their handlers
//! - `config`: paths and user settings
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_planner::config::{paths::PlannerPaths, settings::Settings};
//! use budget_planner::storage::Storage;
//!
//! let paths = PlannerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load(settings.seed_examples)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod schedule;
pub mod services;
pub mod storage;

pub use error::{PlannerError, PlannerResult};
