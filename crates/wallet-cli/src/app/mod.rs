//! Application-level wiring: path resolution and the per-run context.

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{missing_wallet_message, resolve_config_path, resolve_wallet_path};
