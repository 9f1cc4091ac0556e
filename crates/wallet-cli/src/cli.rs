use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use wallet_core::VERSION;

/// Wallet - a personal income and expense ledger
#[derive(Parser)]
#[command(name = "wallet")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the wallet data file
    #[arg(short, long, global = true, env = "WALLET_PATH")]
    pub wallet: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the wallet file will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Replace an existing wallet file
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `balance` command
#[derive(Args)]
pub struct BalanceArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Category: income/expense (or доход/расход)
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Amount, a positive integer
    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    pub amount: i64,

    /// Free-text description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Record id
    #[arg(value_name = "ID")]
    pub id: u64,

    /// New amount
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<i64>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
///
/// A record is listed when it matches any of the given criteria.
#[derive(Args)]
pub struct SearchArgs {
    /// Record id
    #[arg(long)]
    pub id: Option<u64>,

    /// Date the record was added (YYYY-MM-DD)
    #[arg(long)]
    pub created: Option<String>,

    /// Date the record was last edited (YYYY-MM-DD)
    #[arg(long)]
    pub modified: Option<String>,

    /// Category: income/expense (or доход/расход)
    #[arg(long)]
    pub category: Option<String>,

    /// Exact amount
    #[arg(long)]
    pub amount: Option<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Rewrite the totals from the records when they disagree
    #[arg(long)]
    pub repair: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default)
    Shell,

    /// Create a new, empty wallet file
    Init(InitArgs),

    /// Show income, expense and balance
    Balance(BalanceArgs),

    /// Add an income or expense record
    Add(AddArgs),

    /// Change the amount and/or description of a record
    Edit(EditArgs),

    /// Search records
    Search(SearchArgs),

    /// Check that the totals agree with the records
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
