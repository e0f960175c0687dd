//! # git-mirrors
//!
//! This library keeps local mirror clones of remote git repositories up to
//! date. It backs the `git-mirrors` command-line tool, which runs a
//! synchronization pass on a fixed period, forever.
//!
//! ## Quick Example
//!
//! ```
//! use git_mirrors::config::Config;
//! use git_mirrors::repository::Repository;
//!
//! let config = Config::parse(
//!     "[git_mirrors]\n\
//!      path = /srv/mirrors\n\
//!      repositories = https://github.com/python/cpython/, https://github.com/python/cpython\n",
//! )
//! .unwrap();
//! assert_eq!(config.repositories().len(), 2);
//!
//! let repository = Repository::from_url(config.path(), &config.repositories()[0]);
//! assert!(repository.local_path().ends_with("cpython.git"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: Loads and validates the INI file naming the
//!   mirror root and the repositories to mirror.
//! - **Repository Descriptors (`repository`)**: Pair a remote URL with its
//!   local mirror path and answer whether the mirror exists locally or the
//!   repository exists remotely.
//! - **Mirror Store (`mirror`)**: Runs one synchronization pass, choosing per
//!   URL whether to clone, fetch or skip.
//! - **Git (`git`)**: Builds and runs `git` commands without a shell and
//!   without credential prompts.
//!
//! ## Execution Flow
//!
//! For every configured URL, in sorted order:
//!
//! 1.  **Resolve**: Derive the local mirror path from the URL.
//! 2.  **Remote check**: Skip the URL if `git ls-remote` fails.
//! 3.  **Local check**: Fetch into an existing mirror, skip a directory that
//!     is not a mirror of this URL, or clone a new mirror and fetch into it.

pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod logging;
pub mod mirror;
pub mod repository;

#[cfg(test)]
mod name_proptest;
