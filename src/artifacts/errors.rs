//! Error types
//!
//! Only pre-flight problems are errors in the Rust sense: anything that goes
//! wrong for a single file is reported on that file's line and the run moves on.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for usage errors and branch resolution failures.
pub const FATAL_EXIT_CODE: u8 = 128;

/// Exit code for unexpected failures of the backend or of the output stream.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Errors from the version-control backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend process could not be spawned or its I/O failed.
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),

    /// A backend command exited unsuccessfully.
    #[error("`{command}` failed ({}): {stderr}", describe_exit(.exit_code))]
    GitCommand {
        command: String,
        stderr: String,
        exit_code: Option<i32>,
    },

    /// The backend printed something that is not an object id.
    #[error("invalid object id: {0:?}")]
    InvalidObjectId(String),
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit {code}"),
        None => "killed by signal".to_string(),
    }
}

/// Fatal errors that stop a run before any file is touched.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("{0}")]
    Usage(String),

    #[error("not a git repository (or any of the parent directories): {}", .0.display())]
    NotARepository(PathBuf),

    #[error(
        "no upstream configured for {}; pass the branch to compare against",
        .branch.as_deref().map_or_else(|| "a detached HEAD".to_string(), |b| format!("branch '{b}'"))
    )]
    NoUpstreamConfigured { branch: Option<String> },

    #[error("branch '{0}' not found; you may need to fetch it first (git fetch)")]
    BranchNotFound(String),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl ReconcileError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ReconcileError::Usage(_)
            | ReconcileError::NotARepository(_)
            | ReconcileError::NoUpstreamConfigured { .. }
            | ReconcileError::BranchNotFound(_) => FATAL_EXIT_CODE,
            ReconcileError::Backend(_) | ReconcileError::Io(_) => FAILURE_EXIT_CODE,
        }
    }

    /// Whether this error is one of the branch resolution failures.
    pub fn is_branch_resolution(&self) -> bool {
        matches!(
            self,
            ReconcileError::NoUpstreamConfigured { .. } | ReconcileError::BranchNotFound(_)
        )
    }
}
