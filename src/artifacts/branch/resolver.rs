//! Branch resolution
//!
//! Turns the optional branch argument into a [`TargetBranch`] that is known to
//! exist. This runs before any file is looked at: if it fails, the run stops.
//!
//! A user-supplied name is used verbatim and may be short (`dev`,
//! `origin/dev`) or fully qualified (`refs/heads/dev`). Short names are
//! looked up among local branches first, then among remote-tracking ones.
//! Without a name, the upstream configured for the current branch is used;
//! there is no guessing beyond that.

use crate::areas::backend::RepositoryState;
use crate::artifacts::branch::branch_name::{RefKind, TargetBranch};
use crate::artifacts::errors::{BackendError, ReconcileError};

pub fn resolve(
    state: &dyn RepositoryState,
    requested: Option<&str>,
) -> Result<TargetBranch, ReconcileError> {
    let name = match requested {
        Some(name) => name.to_string(),
        None => upstream_name(state)?,
    };
    tracing::debug!(%name, "resolving target branch");

    find_branch(state, &name)?.ok_or(ReconcileError::BranchNotFound(name))
}

fn upstream_name(state: &dyn RepositoryState) -> Result<String, ReconcileError> {
    let branch = state
        .current_branch()?
        .ok_or(ReconcileError::NoUpstreamConfigured { branch: None })?;

    state
        .upstream_of(&branch)?
        .ok_or(ReconcileError::NoUpstreamConfigured {
            branch: Some(branch),
        })
}

/// Look `name` up among local and remote-tracking branches.
pub fn find_branch(
    state: &dyn RepositoryState,
    name: &str,
) -> Result<Option<TargetBranch>, BackendError> {
    if name.is_empty() {
        return Ok(None);
    }

    if let Some(kind) = RefKind::of_full_ref(name) {
        let exists = state.has_ref(name)?;
        return Ok(exists.then(|| TargetBranch::new(name.to_string(), name.to_string(), kind)));
    }

    for kind in [RefKind::Local, RefKind::RemoteTracking] {
        let full_ref = format!("{}{}", kind.prefix(), name);
        if state.has_ref(&full_ref)? {
            return Ok(Some(TargetBranch::new(name.to_string(), full_ref, kind)));
        }
    }

    Ok(None)
}

/// Whether `name` is a local branch head or a remote-tracking branch.
pub fn branch_exists(state: &dyn RepositoryState, name: &str) -> Result<bool, BackendError> {
    Ok(find_branch(state, name)?.is_some())
}
