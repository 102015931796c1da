//! Outcome of evaluating one candidate
//!
//! Only [`Action::Revert`], [`Action::Remove`] and [`Action::CheckoutDeleted`]
//! change anything, and only outside pretend mode. Skips and warnings are
//! reported (or not) and left alone.

use crate::artifacts::branch::branch_name::TargetBranch;
use crate::artifacts::core::display_path;
use crate::artifacts::core::tag::Tag;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Discard the working change of a tracked file; its content matches the target.
    Revert,
    /// Delete an untracked file; its content matches the target.
    Remove,
    /// Restore a locally deleted file that the target branch deletes as well.
    CheckoutDeleted,
    /// Leave the file alone.
    Skip(SkipReason),
    /// Leave the file alone and tell the user why it needs attention.
    Warn(Warning),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Untracked file the target branch does not have; the merge won't touch it.
    NotOnTarget,
    /// Tracked file missing from the target branch without being deleted locally.
    MissingOnTarget,
    /// The file disappeared from the working tree before it could be hashed.
    Vanished,
    /// The target still has the committed content, so the local change survives the merge.
    TargetMatchesHead,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Local content differs from the target's, which also differs from HEAD's.
    HashMismatch {
        local: ObjectId,
        target: ObjectId,
        /// Committed content, for tracked files present at HEAD
        head: Option<ObjectId>,
    },
    /// The file was deleted locally but the target branch changes it.
    LocalDeletedRemoteExists,
    /// The index holds content found neither at HEAD nor on the target;
    /// checking the file out would throw it away.
    StagedChange { staged: ObjectId },
}

impl Action {
    /// Whether applying this action changes the working tree.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Action::Revert | Action::Remove | Action::CheckoutDeleted
        )
    }

    /// The line reported for this action, if it is worth reporting at all.
    pub fn report_line(&self, path: &Path, target: &TargetBranch) -> Option<(Tag, String)> {
        let path = display_path(path);

        let line = match self {
            Action::Revert => (Tag::Checkout, format!("revert {path}")),
            Action::Remove => (Tag::Remove, format!("remove {path}")),
            Action::CheckoutDeleted => (Tag::Checkout, format!("restore deleted {path}")),
            Action::Skip(SkipReason::NotOnTarget | SkipReason::TargetMatchesHead) => return None,
            Action::Skip(SkipReason::MissingOnTarget) => (
                Tag::Error,
                format!("{path}: tracked file not found on {target}"),
            ),
            Action::Skip(SkipReason::Vanished) => (
                Tag::Info,
                format!("{path}: no longer in the working tree, skipped"),
            ),
            Action::Warn(Warning::HashMismatch {
                local,
                target: target_oid,
                head,
            }) => {
                let head = head
                    .as_ref()
                    .map(|head| format!(" (HEAD {head})"))
                    .unwrap_or_default();
                (
                    Tag::Warning,
                    format!("{path}: local {local} differs from {target} {target_oid}{head}"),
                )
            }
            Action::Warn(Warning::LocalDeletedRemoteExists) => (
                Tag::Warning,
                format!("{path}: deleted locally but changed on {target}"),
            ),
            Action::Warn(Warning::StagedChange { staged }) => (
                Tag::Warning,
                format!("{path}: staged {staged} matches neither HEAD nor {target}"),
            ),
        };

        Some(line)
    }
}
