use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::error;

use super::{ConfigError, DeviceTable};

/// Transient state for one scan over a config file.
#[derive(Default)]
struct Scanner {
    table: DeviceTable,
    /// Remote whose block we are inside, once its `name` line has been seen.
    device: Option<String>,
    /// Whether a `begin codes` section is open. `end remote` leaves this
    /// untouched; only `begin remote` and `end codes` clear it.
    in_codes: bool,
}

impl Scanner {
    fn feed(&mut self, raw: &str) {
        let line = raw.replace('\t', " ");
        let line = line.trim();

        if line == "begin remote" {
            self.device = None;
            self.in_codes = false;
            return;
        }

        let Some(device) = &self.device else {
            // The first line mentioning `name` anywhere names the remote;
            // its last token is the name.
            if line.contains("name") {
                if let Some(name) = line.split_whitespace().last() {
                    self.table.entry(name.to_owned()).or_default();
                    self.device = Some(name.to_owned());
                }
            }
            return;
        };

        if line == "end remote" {
            self.device = None;
        } else if line == "begin codes" {
            self.in_codes = true;
        } else if line == "end codes" {
            self.in_codes = false;
        } else if self.in_codes {
            // Command name first, code token last; a lone token is both.
            let mut fields = line.split_whitespace();
            if let Some(command) = fields.next() {
                let code = fields.last().unwrap_or(command);
                if let Some(codes) = self.table.get_mut(device) {
                    codes.insert(command.to_owned(), code.to_owned());
                }
            }
        }
    }
}

/// Reads the lircd.conf at `path` into a device table.
pub(crate) fn parse(path: &Path) -> Result<DeviceTable, ConfigError> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;

    let mut scanner = Scanner::default();
    for line in BufReader::new(file).lines() {
        scanner.feed(&line.map_err(|e| read_error(path, e))?);
    }

    Ok(scanner.table)
}

fn read_error(path: &Path, source: io::Error) -> ConfigError {
    let err = if source.kind() == io::ErrorKind::NotFound {
        ConfigError::NotFound {
            path: path.to_owned(),
            source,
        }
    } else {
        ConfigError::Unreadable {
            path: path.to_owned(),
            source,
        }
    };
    error!("{err}");
    err
}
