use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shaclip",
    about = "Resolve and copy commit ids from git context",
    version
)]
pub struct Cli {
    /// Target file to blame; omit to use the most recent repository commit
    pub file: Option<PathBuf>,

    /// Cursor line in the target file (0-indexed)
    #[arg(long, default_value_t = 0)]
    pub line: i64,

    /// Explicit commit id; skips every lookup
    #[arg(long)]
    pub sha: Option<String>,

    /// Commit id pre-selected by a host view (history panel, picker)
    #[arg(long)]
    pub selected: Option<String>,

    /// Unsaved buffer contents for FILE; '-' reads stdin
    #[arg(long)]
    pub contents: Option<PathBuf>,

    /// Repository to use when no FILE is given
    #[arg(long)]
    pub repo: Option<PathBuf>,

    /// Print the commit id without copying it to the clipboard
    #[arg(long)]
    pub no_copy: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Suppress human-readable output
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
