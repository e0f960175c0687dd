//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures for writing configuration files and for
//! building throwaway upstream repositories with the system `git`.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.write_config(&["https://host/a.git"]);
//!     // ... test code
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_available;
    pub use super::TestFixture;
}

/// Returns true when a usable `git` binary is on the PATH.
///
/// Tests that drive real clones call this first and return early otherwise.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Runs `git` in `dir`, panicking with its stderr on failure.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// A temporary workspace holding a configuration file and a mirror root.
pub struct TestFixture {
    pub temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp: assert_fs::TempDir::new().unwrap(),
        }
    }

    /// Directory where mirrors are written.
    pub fn mirror_root(&self) -> PathBuf {
        self.temp.path().join("mirrors")
    }

    /// Path of the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("git_mirrors.ini")
    }

    /// Writes a configuration listing `repositories` under the mirror root.
    pub fn write_config(&self, repositories: &[&str]) -> PathBuf {
        self.write_raw_config(&format!(
            "[git_mirrors]\npath = {}\nrepositories = {}\n",
            self.mirror_root().display(),
            repositories.join(", ")
        ))
    }

    /// Writes arbitrary text as the configuration file.
    pub fn write_raw_config(&self, content: &str) -> PathBuf {
        self.temp.child("git_mirrors.ini").write_str(content).unwrap();
        self.config_path()
    }

    /// Creates an upstream repository with one commit and returns its path.
    pub fn upstream(&self, name: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::create_dir_all(&path).unwrap();
        git(&path, &["init", "--quiet"]);
        git(
            &path,
            &[
                "-c",
                "user.name=Mirror Test",
                "-c",
                "user.email=mirror@example.com",
                "-c",
                "commit.gpgsign=false",
                "commit",
                "--allow-empty",
                "--quiet",
                "-m",
                "initial",
            ],
        );
        path
    }
}
