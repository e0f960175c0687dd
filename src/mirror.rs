//! # Mirror Store
//!
//! The `MirrorStore` runs one synchronization pass over a [`Config`]. For each
//! configured URL, in sorted order, it decides between four outcomes:
//!
//! 1.  The remote is unreachable or has no refs: warn and skip. The local
//!     filesystem is not touched.
//! 2.  A mirror of the same URL exists locally: fetch.
//! 3.  Something else already occupies the local path: warn and skip, leaving
//!     that directory alone.
//! 4.  Nothing exists locally: clone a mirror, then fetch. The clone alone
//!     does not leave `FETCH_HEAD` behind; the fetch establishes it.
//!
//! Check failures only ever produce warnings. A failing clone or fetch ends
//! the pass with an [`Error::ExternalProcess`](crate::error::Error).

use log::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::git::{GitOperations, SystemGit};
use crate::repository::Repository;

/// What a single pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Mirrors cloned during this pass.
    pub created: usize,
    /// Existing mirrors that were fetched.
    pub updated: usize,
    /// URLs skipped because the remote was missing or the path was taken.
    pub skipped: usize,
}

/// Drives clone and fetch operations for every configured repository.
pub struct MirrorStore {
    git_ops: Box<dyn GitOperations>,
}

impl Default for MirrorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MirrorStore {
    /// Creates a store that runs the system `git`.
    pub fn new() -> Self {
        Self {
            git_ops: Box::new(SystemGit),
        }
    }

    /// Creates a store with a custom `GitOperations` implementation.
    ///
    /// This is primarily used for testing to inject mock operations.
    pub fn with_operations(git_ops: Box<dyn GitOperations>) -> Self {
        Self { git_ops }
    }

    /// Clones or updates every repository listed in `configuration`.
    pub fn synchronize(&self, configuration: &Config) -> Result<SyncSummary> {
        let mut summary = SyncSummary::default();

        for url in configuration.repositories() {
            info!("Mirroring repository: {}.", url);

            let repository = Repository::from_url(configuration.path(), url);
            debug!("{:?}", repository);

            if !repository.exists_on_remote(self.git_ops.as_ref()) {
                warn!("The remote repository does not exist: {}.", url);
                summary.skipped += 1;
                continue;
            }

            if repository.exists_locally() {
                repository.update_local_copy(self.git_ops.as_ref())?;
                summary.updated += 1;
                continue;
            }

            if repository.is_directory() {
                warn!(
                    "Non-mirror repository detected at path: {}.",
                    repository.local_path().display()
                );
                warn!("Skipping cloning.");
                summary.skipped += 1;
                continue;
            }

            repository.create_local_copy(self.git_ops.as_ref())?;
            // the fetch populates FETCH_HEAD
            repository.update_local_copy(self.git_ops.as_ref())?;
            summary.created += 1;
        }

        Ok(summary)
    }
}
