//! # git-mirrors CLI
//!
//! This is the binary entry point for the `git-mirrors` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the polling loop defined in `cli`.
//! - Translating fatal errors into a log line and a distinguishing exit status.
//!
//! The mirroring logic lives in the `lib.rs` library crate, so the binary is a
//! thin wrapper around it.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use git_mirrors::error::Error;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        // a git child killed by the same Ctrl-C can fail before the handler exits
        Err(_) if cli::interrupted() => ExitCode::SUCCESS,
        Err(err) => {
            debug!("An unexpected error occurred at this program runtime: {:?}", err);
            error!("{}", err);
            let code = err.downcast_ref::<Error>().map_or(1, Error::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
