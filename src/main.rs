mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use gitregulars::commands::{Active, Runnable};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.options.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let g = cli.options.global();
    match cli.command.unwrap_or(Commands::Active(Active::default())) {
        Commands::Active(cmd) => cmd.run(&g),
        Commands::Recent(cmd) => cmd.run(&g),
    }
}
