use std::path::Path;

use clap::Args;
use color_eyre::eyre::Result;

use zapper::Lirc;

#[derive(Clone, Debug, Args)]
pub(crate) struct Command {}

impl Command {
    pub(super) fn run(self, config: &Path) -> Result<()> {
        let lirc = Lirc::new(config)?;

        let mut devices: Vec<&str> = lirc.devices().collect();
        devices.sort_unstable();
        for device in devices {
            println!("{device}");
        }

        Ok(())
    }
}
