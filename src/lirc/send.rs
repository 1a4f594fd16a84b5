use std::process::Command;

use tracing::error;

/// Transmitter binary, resolved through the executable search path.
pub(crate) const IRSEND: &str = "irsend";

/// Runs `<program> SEND_ONCE <device> <command>` and reports whether it
/// exited cleanly.
///
/// The arguments are passed as a literal vector, never through a shell. The
/// call blocks until the transmitter exits; there is no timeout and no
/// retry.
pub(crate) fn send_once(program: &str, device: &str, command: &str) -> bool {
    match Command::new(program)
        .args(["SEND_ONCE", device, command])
        .status()
    {
        Ok(status) if status.success() => true,
        Ok(status) => {
            error!("`{program} SEND_ONCE {device} {command}` failed with {status}");
            false
        }
        Err(e) => {
            error!("could not run {program}: {e}");
            false
        }
    }
}
