use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cmd;

#[derive(Debug, Parser)]
struct Cli {
    /// Path to the lircd.conf file to read remotes from.
    #[arg(long, global = true, default_value = zapper::lirc::DEFAULT_CONF)]
    config: PathBuf,

    #[command(subcommand)]
    command: cmd::Command,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    cli.command.run(&cli.config)
}
