use std::path::Path;

use clap::Args;
use color_eyre::eyre::{eyre, Result};

use zapper::Lirc;

#[derive(Clone, Debug, Args)]
pub(crate) struct Command {
    /// Remote to address, as named in the config file.
    device: String,
    /// Command to send, as listed in the remote's codes section.
    command: String,
}

impl Command {
    pub(super) fn run(self, config: &Path) -> Result<()> {
        let lirc = Lirc::new(config)?;

        if !lirc.send_once(&self.device, &self.command) {
            return Err(eyre!("failed to send {} to {}", self.command, self.device));
        }

        Ok(())
    }
}
