//! Configuration module for the budget planner
//!
//! This module provides configuration management including:
//! - Path resolution for data, settings and the audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::Settings;
