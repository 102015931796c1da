//! Version-control backend contract
//!
//! The reconciler never talks to git directly. Everything it needs to know
//! about the repository goes through [`RepositoryState`], a read-only view,
//! and the single mutating operation it performs through the backend lives on
//! [`Backend`]. The evaluator only ever receives a `&dyn RepositoryState`, so
//! it cannot mutate the working tree even by accident.
//!
//! All paths are relative to the repository root.

use crate::artifacts::errors::BackendError;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};

/// Revision naming the current commit
pub const HEAD: &str = "HEAD";

/// Read-only view of a repository
pub trait RepositoryState {
    /// Name of the checked-out branch, `None` on a detached HEAD.
    fn current_branch(&self) -> Result<Option<String>, BackendError>;

    /// Fully qualified upstream ref configured for `branch`, if any.
    fn upstream_of(&self, branch: &str) -> Result<Option<String>, BackendError>;

    /// Whether the fully qualified reference `full_ref` exists.
    fn has_ref(&self, full_ref: &str) -> Result<bool, BackendError>;

    /// Object id of `path` in the tree of `rev`.
    ///
    /// `Ok(None)` means the path does not exist there; any other failure is
    /// an error.
    fn resolve_blob(&self, rev: &str, path: &Path) -> Result<Option<ObjectId>, BackendError>;

    /// Object id of `path` at stage 0 of the index, `None` when it is not there.
    fn staged_blob(&self, path: &Path) -> Result<Option<ObjectId>, BackendError>;

    /// Whether `path` exists in the tree of `rev`.
    fn path_exists_at(&self, rev: &str, path: &Path) -> Result<bool, BackendError> {
        Ok(self.resolve_blob(rev, path)?.is_some())
    }

    /// Blob object id of the file at `path` in the working tree.
    fn hash_file(&self, path: &Path) -> Result<ObjectId, BackendError>;

    /// Tracked paths whose working copy differs from the current commit.
    fn modified_paths(&self) -> Result<Vec<PathBuf>, BackendError>;

    /// Paths present in the working tree that are neither tracked nor ignored.
    fn untracked_paths(&self) -> Result<Vec<PathBuf>, BackendError>;

    /// Whether the working tree status reports `path` as deleted.
    fn is_deleted(&self, path: &Path) -> Result<bool, BackendError>;
}

/// A repository that can also be written to
pub trait Backend: RepositoryState {
    /// Restore `path` in both the index and the working tree from the current commit.
    fn checkout_from_head(&self, path: &Path) -> Result<(), BackendError>;
}
