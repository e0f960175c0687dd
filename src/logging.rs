//! Logging setup for the `git-mirrors` binary.
//!
//! Library code only talks to the `log` facade. The binary installs an
//! `env_logger` sink once at startup. It writes to stderr as
//! `<timestamp> - <LEVEL> :: <target> :: <message>`.

use std::io::Write;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Log target prefix shared by every module of this crate.
const CRATE_TARGET: &str = "git_mirrors";

/// Builds the logger used by the binary without installing it.
pub fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_module(CRATE_TARGET, level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} :: {} :: {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    builder
}

/// Installs the logger. Later calls leave the first logger in place.
///
/// Directives in `RUST_LOG`, when set, take precedence over `level`.
pub fn init(level: LevelFilter) {
    let mut builder = builder(level);
    builder.parse_env(Env::default());
    let _ = builder.try_init();
}
