//! Running the system `git` binary.
//!
//! Every command is built as a discrete argument vector and spawned directly,
//! never through a shell, so URL content can't be interpreted as shell syntax.
//! The child inherits the current environment with two overrides that always
//! win:
//!
//! - `TERM=dumb`
//! - `GIT_TERMINAL_PROMPT=0`, so a repository that needs credentials fails
//!   instead of blocking on a prompt.
//!
//! The [`GitOperations`] trait sits between callers and the process spawner
//! so tests can record commands without running `git`.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, error};

use crate::error::{Error, Result};

/// Environment overrides applied to every git invocation.
pub const GIT_ENV: [(&str, &str); 2] = [("TERM", "dumb"), ("GIT_TERMINAL_PROMPT", "0")];

/// A single `git` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    silent: bool,
}

impl GitCommand {
    /// Starts a command with the given git arguments, e.g. `["fetch", "--all"]`.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            silent: false,
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Runs the command inside `dir` instead of the current directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Discards stdout and stderr, and skips error logging on failure.
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// `clone --mirror --no-hardlinks -- <url> <dest>`
    pub fn clone_mirror(url: &str, dest: &Path) -> Self {
        Self::new(["clone", "--mirror", "--no-hardlinks", "--"])
            .arg(url)
            .arg(dest)
    }

    /// `fetch --all --prune --verbose`, run inside `repo`.
    pub fn fetch_all(repo: &Path) -> Self {
        Self::new(["fetch", "--all", "--prune", "--verbose"]).current_dir(repo)
    }

    /// `ls-remote --exit-code -- <url>`, silenced.
    pub fn ls_remote(url: &str) -> Self {
        Self::new(["ls-remote", "--exit-code", "--"]).arg(url).silent()
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("git")?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Runs the command to completion, failing on a non-zero exit status.
    fn run(&self, command: &GitCommand) -> Result<()>;
}

/// The default implementation of `GitOperations`, which spawns the system's
/// `git` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGit;

impl GitOperations for SystemGit {
    fn run(&self, command: &GitCommand) -> Result<()> {
        run(command)
    }
}

/// Spawns `git` with the controlled environment and waits for it.
pub fn run(command: &GitCommand) -> Result<()> {
    debug!("Running: {}", command);

    let mut process = Command::new("git");
    process.args(&command.args).envs(GIT_ENV).stdin(Stdio::null());
    if let Some(dir) = &command.cwd {
        process.current_dir(dir);
    }
    if command.silent {
        process.stdout(Stdio::null()).stderr(Stdio::null());
    }

    let outcome = match process.status() {
        Ok(status) if status.success() => return Ok(()),
        Ok(status) => status.to_string(),
        Err(e) => e.to_string(),
    };

    if !command.silent {
        error!("An error occurred while attempting to execute the command.");
    }
    Err(Error::ExternalProcess {
        command: command.to_string(),
        reason: outcome,
    })
}
