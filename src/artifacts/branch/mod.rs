//! Target branch handling
//!
//! - `branch_name`: the resolved target reference
//! - `resolver`: upstream detection and the existence check gating a run

pub mod branch_name;
pub mod resolver;

/// Namespace of local branch heads
pub const LOCAL_REF_PREFIX: &str = "refs/heads/";

/// Namespace of remote-tracking branches
pub const REMOTE_REF_PREFIX: &str = "refs/remotes/";
