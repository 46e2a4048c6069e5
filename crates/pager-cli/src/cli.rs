use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT_HASH"),
    ")"
);

#[derive(Parser)]
#[command(name = "pager")]
#[command(about = "Compute pagination page ranges", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Path to a config file (or set PAGER_CONFIG env var)
    #[arg(long, global = true, value_name = "FILE", env = "PAGER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the page labels for a pagination control
    Range(RangeArgs),
    /// Compute the page count for a listing
    Pages(PagesArgs),
    /// Move to another page and show the resulting control
    Nav(NavArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Args)]
pub struct RangeArgs {
    #[arg(long)]
    pub total_pages: usize,
    #[arg(long)]
    pub current: usize,
    /// Pages shown on each side of the current page (default from config, else 1)
    #[arg(long)]
    pub siblings: Option<usize>,
    /// Reject an out-of-range current page instead of clamping it
    #[arg(long)]
    pub strict: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct PagesArgs {
    #[arg(long)]
    pub total_items: usize,
    /// Items per page (default from config, else 10)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Args)]
pub struct NavArgs {
    #[arg(long)]
    pub total_pages: usize,
    #[arg(long)]
    pub current: usize,
    /// first, prev, next, last, or a page number
    #[arg(long, value_parser = parse_nav_target)]
    pub to: NavTarget,
    #[arg(long)]
    pub siblings: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    First,
    Prev,
    Next,
    Last,
    Page(usize),
}

fn parse_nav_target(s: &str) -> Result<NavTarget, String> {
    match s.to_ascii_lowercase().as_str() {
        "first" => Ok(NavTarget::First),
        "prev" | "previous" => Ok(NavTarget::Prev),
        "next" => Ok(NavTarget::Next),
        "last" => Ok(NavTarget::Last),
        other => other.parse().map(NavTarget::Page).map_err(|_| {
            format!(
                "Invalid target '{}'. Expected first, prev, next, last, or a page number",
                s
            )
        }),
    }
}
