//! # Configuration Loading and Validation
//!
//! This module reads the INI file that tells `git-mirrors` where to keep its
//! mirrors and which repositories to mirror. A minimal file looks like this:
//!
//! ```ini
//! [git_mirrors]
//! path = ~/mirrors
//! repositories = https://github.com/rust-lang/rust, git@github.com:serde-rs/serde.git
//! ```
//!
//! ## Parsing
//!
//! - `path` is tilde-expanded, made absolute and lexically normalized.
//! - `repositories` is a single value. Entries are separated by any run of
//!   characters that cannot appear in a URL (`[A-Za-z0-9_:/@.-]` are the only
//!   URL characters), so commas, semicolons, spaces and tabs all work and can
//!   be mixed freely.
//! - Values may continue on indented lines, so one URL per line works too.
//! - Lines starting with `;` or `#` are comments, even when indented.
//!
//! ## Validation
//!
//! Each field goes through an explicit validation function (`validate_path`,
//! `validate_repositories`) when a [`Config`] is constructed. The resulting
//! repository list is deduplicated and sorted, so loading the same file twice
//! always yields equal values.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use ini::{Ini, ParseOption, Properties};
use log::{debug, error};
use regex::Regex;
use serde::Serialize;

use crate::defaults::CONFIG_SECTION;
use crate::error::{Error, Result};

/// Immutable configuration for local repository mirroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Root directory where mirrored repositories are stored.
    path: PathBuf,
    /// Remote repository URLs, sorted and without duplicates.
    repositories: Vec<String>,
}

impl Config {
    /// Creates a validated configuration.
    ///
    /// The path is expanded and normalized; the repositories are trimmed,
    /// checked, deduplicated and sorted.
    pub fn new<I, S>(path: &str, repositories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            path: validate_path(path)?,
            repositories: validate_repositories(repositories)?,
        })
    }

    /// Loads the configuration from an INI file on disk.
    ///
    /// A leading `~` in `path` is expanded to the home directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expand_tilde(path.as_ref());
        let content = std::fs::read_to_string(&path).map_err(|source| {
            error!("Unable to access the configuration file at the specified location.");
            Error::Filesystem {
                path: path.clone(),
                source,
            }
        })?;

        Self::parse(&content).inspect_err(|_| {
            error!("The provided configuration contains syntax errors or missing fields.");
        })
    }

    /// Parses the configuration from INI text.
    pub fn parse(content: &str) -> Result<Self> {
        let options = ParseOption {
            enabled_indented_mutiline_value: true,
            ..ParseOption::default()
        };
        let document = Ini::load_from_str_opt(&strip_comments(content), options)
            .map_err(|e| Error::config(format!("Invalid or unreadable configuration: {}", e)))?;

        let section = document.section(Some(CONFIG_SECTION)).ok_or_else(|| {
            Error::config(format!("Missing required section [{}].", CONFIG_SECTION))
        })?;
        debug!("{:?}", section);

        let (Some(path), Some(repositories)) =
            (lookup(section, "path"), lookup(section, "repositories"))
        else {
            return Err(Error::config("File does not match expected schema."));
        };

        Self::new(path, split_repositories(repositories))
    }

    /// The root directory for all mirrors.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The repositories to mirror, in processing order.
    pub fn repositories(&self) -> &[String] {
        &self.repositories
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Looks up a key the way INI readers usually do: case-insensitively.
pub(crate) fn lookup<'a>(section: &'a Properties, key: &str) -> Option<&'a str> {
    section
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
}

/// Runs of characters that cannot appear in a repository URL.
static URL_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_:/@.-]+").expect("URL_SEPARATOR regex is valid"));

/// Drops full-line comments, indented ones included.
pub(crate) fn strip_comments(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with([';', '#']))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits a raw `repositories` value into individual, non-empty entries.
pub fn split_repositories(raw: &str) -> impl Iterator<Item = &str> {
    URL_SEPARATOR
        .split(raw)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

/// Validates the mirror root path and converts it to an absolute, normalized
/// path.
pub fn validate_path(raw: &str) -> Result<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::config("Path can not be empty."));
    }

    let expanded = expand_tilde(Path::new(raw));
    let absolute = std::path::absolute(&expanded)
        .map_err(|e| Error::config(format!("Invalid path {}: {}", raw, e)))?;
    Ok(normalize(&absolute))
}

/// Validates repository URLs and returns them sorted with duplicates removed.
pub fn validate_repositories<I, S>(repositories: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique = BTreeSet::new();
    for item in repositories {
        let url = item.as_ref().trim();
        if url.is_empty() {
            return Err(Error::config("Repository url can not be empty."));
        }
        if URL_SEPARATOR.is_match(url) {
            return Err(Error::config(format!(
                "Repository url contains unsupported characters: {}",
                url
            )));
        }
        unique.insert(url.to_string());
    }
    Ok(unique.into_iter().collect())
}

/// Expands a leading `~` to the current user's home directory.
///
/// Paths such as `~other/dir` are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Lexically removes `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
