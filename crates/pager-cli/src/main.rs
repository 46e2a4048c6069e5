mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use pager_core::PagerConfig;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("PAGER_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => match PagerConfig::load_from(path) {
            Ok(config) => config,
            Err(e) => output::output_error(&format!(
                "Failed to load config {}: {}",
                path.display(),
                e
            )),
        },
        None => PagerConfig::load(),
    };
    tracing::debug!(?config, "Loaded config");

    match cli.command {
        Commands::Range(args) => handlers::range::handle(&config, args)?,
        Commands::Pages(args) => handlers::pages::handle(&config, args)?,
        Commands::Nav(args) => handlers::nav::handle(&config, args)?,
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "pager", &mut std::io::stdout());
        }
    }

    Ok(())
}
