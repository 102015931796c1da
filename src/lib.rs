//! git-premerge
//!
//! Prepares a working tree for a merge by discarding local changes that are
//! byte-identical to the state of the incoming branch. Files whose content
//! already matches the target are reverted (tracked) or removed (untracked), so
//! the merge no longer aborts with "would be overwritten" errors.
//!
//! - `areas`: the repository, its version-control backend and the working tree
//! - `artifacts`: branch resolution, candidate enumeration and the per-file decision
//! - `commands`: the user-facing reconcile command

pub mod areas;
pub mod artifacts;
pub mod commands;
