//! File-level parsing tests driven through the public `Lirc` surface.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use zapper::{ConfigError, Lirc};

const CONFIG: &str = "\
# generated by irrecord
begin remote

  name  TV
  bits           16
  flags SPACE_ENC|CONST_LENGTH
  eps            30
  aeps          100

      begin codes
          POWER                    0x10EF8877
          VOL_UP                   0x10EFA05F
          VOL_DOWN                 0x10EF00FF
      end codes

end remote

begin remote
  name  AMP
  begin codes
      MUTE                     0x807F906F
  end codes
end remote
";

fn write_conf(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("lircd.conf");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn devices_returns_every_remote_name() {
    let (_dir, path) = write_conf(CONFIG);
    let lirc = Lirc::new(&path).expect("parse config");

    let devices: HashSet<&str> = lirc.devices().collect();
    assert_eq!(devices, HashSet::from(["TV", "AMP"]));
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Lirc::new(dir.path().join("no-such.conf")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }), "got {err:?}");
}

#[test]
fn unopenable_path_is_reported_as_unreadable() {
    // A directory opens but cannot be read as a stream of lines.
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Lirc::new(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Unreadable { .. }), "got {err:?}");
}

#[test]
fn instances_own_independent_tables() {
    let (_dir, path) = write_conf(CONFIG);
    let first = Lirc::new(&path).expect("parse config");

    let mut extended = CONFIG.to_owned();
    extended.push_str(
        "begin remote\n  name  DVD\n  begin codes\n    EJECT 0x1\n  end codes\nend remote\n",
    );
    fs::write(&path, extended).expect("rewrite config");
    let second = Lirc::new(&path).expect("reparse config");

    assert!(!first.devices().any(|d| d == "DVD"));
    assert!(second.devices().any(|d| d == "DVD"));
    assert_eq!(first.devices().count(), 2);
    assert_eq!(second.devices().count(), 3);
}
