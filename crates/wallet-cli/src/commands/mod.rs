//! Subcommand handlers.

pub mod add;
pub mod balance;
pub mod check;
pub mod edit;
pub mod init;
pub mod misc;
pub mod search;
pub mod shell;
