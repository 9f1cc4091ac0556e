//! Record and summary rendering for the subcommands.
//!
//! JSON output uses English keys; the Russian field names stay a concern of
//! the file format.

mod json;
mod text;

pub use json::{record_json, records_json, summary_json};
pub use text::{print_record, print_record_list, print_summary};
