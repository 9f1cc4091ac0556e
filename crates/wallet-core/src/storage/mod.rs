//! Storage layer: the wallet document model and where it is kept.

pub mod codec;
mod json_file;
mod memory;
pub mod traits;
pub mod types;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use traits::DocumentStore;
pub use types::{parse_date, recompute_summary, Category, Ledger, Record, Summary, DATE_FORMAT};
