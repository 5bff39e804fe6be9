//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; the CLI decides where it goes.

pub mod agenda;
pub mod breakdown;
pub mod format;
pub mod item;
pub mod summary;

pub use agenda::format_agenda;
pub use breakdown::format_breakdown;
pub use item::{format_item_details, format_item_list};
pub use summary::format_dashboard;
