//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells; clap uses it for usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (wallet file, record).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Integrity check failed.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// File name used for a wallet created without an explicit path.
pub const DEFAULT_WALLET_FILE: &str = "wallet_data.json";
