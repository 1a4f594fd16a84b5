//! Parse an lircd.conf remote definition file and fire its codes through
//! the `irsend` transmitter.

pub mod lirc;

pub use lirc::{ConfigError, Lirc};
