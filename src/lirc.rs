use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::error;

mod parse;
mod send;

/// Where lircd keeps its config unless told otherwise.
pub const DEFAULT_CONF: &str = "/etc/lirc/lircd.conf";

/// Command name to raw code token, for one remote.
pub(crate) type CodeTable = HashMap<String, String>;

/// Remote name to its code table.
pub(crate) type DeviceTable = HashMap<String, CodeTable>;

/// Errors opening or reading an lircd.conf file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist.
    #[error("config file not found: {}", .path.display())]
    NotFound { path: PathBuf, source: io::Error },
    /// The config file exists but could not be opened or read.
    #[error("could not read config file {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },
}

/// A parsed lircd.conf, able to send any of its codes through `irsend`.
///
/// The remote table is built once by [`Lirc::new`] and never modified
/// afterwards; every instance owns its own table.
#[derive(Clone, Debug)]
pub struct Lirc {
    codes: DeviceTable,
    irsend: String,
}

impl Lirc {
    /// Parses the config file at `conf` into a new client.
    pub fn new(conf: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self {
            codes: parse::parse(conf.as_ref())?,
            irsend: send::IRSEND.to_owned(),
        })
    }

    /// Uses `program` as the transmitter instead of `irsend` from the
    /// search path.
    pub fn with_irsend(mut self, program: impl Into<String>) -> Self {
        self.irsend = program.into();
        self
    }

    /// The names of every remote defined in the config.
    pub fn devices(&self) -> impl Iterator<Item = &str> + '_ {
        self.codes.keys().map(String::as_str)
    }

    /// Sends `command` to `device` once.
    ///
    /// Both names are checked against the parsed table before anything is
    /// spawned. Every failure, from an unknown name to a transmitter that
    /// cannot be started, is logged and collapsed into `false`.
    pub fn send_once(&self, device: &str, command: &str) -> bool {
        let Some(codes) = self.codes.get(device) else {
            error!("{device} is not a valid device!");
            return false;
        };
        if !codes.contains_key(command) {
            error!("{command} is not a valid code for device {device}");
            return false;
        }

        send::send_once(&self.irsend, device, command)
    }
}
