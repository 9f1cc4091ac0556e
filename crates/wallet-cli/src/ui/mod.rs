//! Terminal output for the subcommands.
//!
//! - **context**: TTY, color and width detection plus output mode routing
//! - **theme**: Badges and owo-colors styling
//! - **render**: Headers, receipts, key/value lines, tables
//! - **format**: Cell formatting (truncation, dates)
//!
//! The interactive shell writes its own plain lines and does not use this
//! module.

mod context;
pub mod format;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{badge, header, hint, kv, print, print_error, receipt, simple_table, Column};
