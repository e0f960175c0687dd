//! # Repository Descriptors
//!
//! A [`Repository`] pairs a remote URL with the local directory that holds its
//! mirror. The local directory is derived from the URL alone: the last path
//! segment with `.git` appended when missing, placed under the configured
//! mirror root. Both HTTPS-style (`https://host/owner/repo`) and SCP-style
//! (`git@host:owner/repo.git`) URLs end in a `/`-delimited segment, so they
//! resolve the same way.
//!
//! Descriptors are cheap value objects. They hold no state beyond the URL and
//! path, and every query re-reads the filesystem or asks the remote.
//!
//! ## Mirror identity
//!
//! A directory only counts as an existing mirror when it looks like a bare
//! repository (`config`, `objects`, `refs` and `HEAD` are present) and its
//! `config` has a `remote` section whose `url` matches this descriptor and
//! whose `mirror` flag is true. Anything else at that path is left untouched.

use std::fmt;
use std::path::{Path, PathBuf};

use ini::Ini;
use log::debug;
use serde::Serialize;

use crate::config::{expand_tilde, lookup, strip_comments};
use crate::error::Result;
use crate::git::{GitCommand, GitOperations};

/// Entries every bare repository has at its top level.
pub const MIRROR_ENTRIES: [&str; 4] = ["config", "objects", "refs", "HEAD"];

/// Derives the mirror directory name for a repository URL.
///
/// Trailing slashes are ignored and `.git` is appended unless already present.
///
/// ```
/// use git_mirrors::repository::derive_name;
///
/// assert_eq!(derive_name("https://github.com/python/cpython/"), "cpython.git");
/// assert_eq!(derive_name("git@github.com:python/cpython.git"), "cpython.git");
/// ```
pub fn derive_name(url: &str) -> String {
    let name = url.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    if name.ends_with(".git") {
        name.to_string()
    } else {
        format!("{}.git", name)
    }
}

/// Parses a git-style boolean (`true/yes/on/1`, `false/no/off/0`).
fn parse_git_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// One remote repository and the local path of its mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    local_path: PathBuf,
    url: String,
}

impl Repository {
    pub fn new(local_path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            local_path: local_path.into(),
            url: url.into(),
        }
    }

    /// Creates a descriptor whose local path is `parent/derive_name(url)`.
    pub fn from_url(parent: &Path, url: &str) -> Self {
        Self::new(expand_tilde(parent).join(derive_name(url)), url)
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether anything directory-like already occupies the local path.
    pub fn is_directory(&self) -> bool {
        self.local_path.is_dir()
    }

    /// Determines whether a mirror of this exact URL exists locally.
    ///
    /// Never fails: a missing directory, a missing structural entry or an
    /// unreadable `config` all count as "no mirror".
    pub fn exists_locally(&self) -> bool {
        if !self.is_directory() {
            return false;
        }
        if let Some(missing) = MIRROR_ENTRIES
            .iter()
            .find(|entry| !self.local_path.join(entry).exists())
        {
            debug!("{} has no {}", self.local_path.display(), missing);
            return false;
        }

        let content = match std::fs::read_to_string(self.local_path.join("config")) {
            Ok(content) => content,
            Err(e) => {
                debug!("Unreadable config in {}: {}", self.local_path.display(), e);
                return false;
            }
        };
        let config = match Ini::load_from_str(&strip_comments(&content)) {
            Ok(config) => config,
            Err(e) => {
                debug!("Malformed config in {}: {}", self.local_path.display(), e);
                return false;
            }
        };

        let url = self.url.trim();
        for (name, properties) in config.iter() {
            if !name.is_some_and(|name| name.starts_with("remote")) {
                continue;
            }
            if lookup(properties, "url").map(str::trim) == Some(url) {
                return lookup(properties, "mirror")
                    .and_then(parse_git_bool)
                    .unwrap_or(false);
            }
        }
        false
    }

    /// Determines whether the remote repository is reachable and has refs.
    pub fn exists_on_remote(&self, git: &dyn GitOperations) -> bool {
        git.run(&GitCommand::ls_remote(&self.url)).is_ok()
    }

    /// Clones a mirror of the repository into the local path.
    pub fn create_local_copy(&self, git: &dyn GitOperations) -> Result<()> {
        git.run(&GitCommand::clone_mirror(&self.url, &self.local_path))
    }

    /// Fetches all remotes into the local mirror, pruning stale refs.
    pub fn update_local_copy(&self, git: &dyn GitOperations) -> Result<()> {
        git.run(&GitCommand::fetch_all(&self.local_path))
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
