use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nest", about = concat!("[ ] nest v", env!("CARGO_PKG_VERSION"), " - nested to-do lists with a work/break timer"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task, or a subtask when given a parent path
    Add(PathArgs),
    /// Toggle a task between done and not done
    Check(PathArgs),
    /// Delete a task and its whole subtree
    Rm(PathArgs),
    /// Show the current list's tasks
    List(ListArgs),
    /// Show every list with task counts
    Lists,
    /// Create a new list and select it
    New(NewArgs),
    /// Rename a list, keeping its contents
    Rename(RenameArgs),
    /// Delete a list and every task in it
    Drop(DropArgs),
    /// Select the list task commands operate on
    Select(SelectArgs),
    /// Work/break interval timer
    Timer(TimerCmd),
    /// Start over with an empty store (the old file is kept as a backup)
    Reset(ResetArgs),
}

// ---------------------------------------------------------------------------
// Task command args
// ---------------------------------------------------------------------------

/// A task addressed by its chain of ancestor texts, root first.
/// `nest add Groceries` adds a top-level task; `nest add Groceries Milk`
/// adds "Milk" under "Groceries".
#[derive(Args)]
pub struct PathArgs {
    /// Task path: ancestor texts first, the target text last
    #[arg(required = true, num_args = 1..)]
    pub path: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Show every list, not just the current one
    #[arg(long)]
    pub all: bool,
}

// ---------------------------------------------------------------------------
// List command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct NewArgs {
    /// Base for the generated name (default: "List", giving "List 1", ...)
    pub base: Option<String>,
}

#[derive(Args)]
pub struct RenameArgs {
    /// List to rename
    pub old: String,
    /// New name
    pub new: String,
}

#[derive(Args)]
pub struct DropArgs {
    /// List to delete
    pub name: String,
    /// Confirm deleting the list and everything in it
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct SelectArgs {
    /// List to select
    pub name: String,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Confirm discarding the store
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Timer
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct TimerCmd {
    #[command(subcommand)]
    pub action: TimerAction,
}

#[derive(Subcommand)]
pub enum TimerAction {
    /// Set work and break durations in minutes
    Set(TimerSetArgs),
    /// Show the configured durations
    Show,
    /// Run one work/break cycle in the foreground
    Run,
}

#[derive(Args)]
pub struct TimerSetArgs {
    /// Work interval in minutes
    #[arg(value_name = "WORK")]
    pub work: u32,
    /// Break interval in minutes
    #[arg(value_name = "BREAK")]
    pub brk: u32,
}
