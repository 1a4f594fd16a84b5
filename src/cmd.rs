use std::path::Path;

use clap::Subcommand;
use color_eyre::eyre::Result;

mod devices;
mod send;

#[derive(Clone, Debug, Subcommand)]
pub(crate) enum Command {
    /// List the remotes defined in the config file.
    Devices(devices::Command),
    /// Send a single command to a remote.
    Send(send::Command),
}

impl Command {
    pub(crate) fn run(self, config: &Path) -> Result<()> {
        match self {
            Command::Devices(cmd) => cmd.run(config),
            Command::Send(cmd) => cmd.run(config),
        }
    }
}
