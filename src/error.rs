//! # Error Handling
//!
//! This module defines the centralized error type for `git-mirrors`. It uses
//! the `thiserror` library to describe every failure that can end a run.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. There are three kinds of failure:
//!   - Configuration errors: the configuration file is malformed, is missing
//!     a required key, or holds a value that fails validation.
//!   - Filesystem errors: the configuration file cannot be read at all.
//!   - External process errors: a `git` command could not be spawned or
//!     exited with a non-zero status.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Checks that only ask a question (does the remote exist? is this directory
//! a mirror?) never return these errors; they answer `false` instead. Only
//! configuration loading and the clone/fetch commands surface an `Error`.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for configuration errors (`EX_CONFIG` from sysexits.h).
pub const EXIT_CONFIG: i32 = 78;

/// Exit status for filesystem errors (`EX_IOERR` from sysexits.h).
pub const EXIT_IO: i32 = 74;

/// Exit status for external process errors (`EX_UNAVAILABLE` from sysexits.h).
pub const EXIT_EXTERNAL_PROCESS: i32 = 69;

/// Main error type for git-mirrors operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration is malformed or does not match the expected schema.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The configuration file could not be accessed.
    #[error("Unable to load configuration from {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `git` command failed to launch or exited unsuccessfully.
    ///
    /// `command` holds the full command line, e.g.
    /// `git fetch --all --prune --verbose`.
    #[error("Failed to execute the command: {command} ({reason})")]
    ExternalProcess { command: String, reason: String },
}

impl Error {
    /// Shorthand for building a [`Error::Config`].
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// The process exit status that reports this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config { .. } => EXIT_CONFIG,
            Error::Filesystem { .. } => EXIT_IO,
            Error::ExternalProcess { .. } => EXIT_EXTERNAL_PROCESS,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
