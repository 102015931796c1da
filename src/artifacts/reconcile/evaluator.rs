//! The per-file decision procedure
//!
//! For each candidate the evaluator compares up to three blob ids: the file
//! on disk, the file at the tip of the target branch and, for tracked files,
//! the file at HEAD.
//!
//! | Candidate | On target | On disk | Comparison                 | Action            |
//! |-----------|-----------|---------|----------------------------|-------------------|
//! | untracked | no        |         |                            | skip              |
//! | tracked   | no        | present |                            | skip, error       |
//! | tracked   | no        | deleted |                            | checkout deleted  |
//! | tracked   | no        | deleted | staged != HEAD             | warn              |
//! | any       | yes       | absent  |                            | skip, info        |
//! | tracked   | yes       | deleted | target != HEAD             | warn              |
//! | untracked | yes       | present | local == target            | remove            |
//! | untracked | yes       | present | local != target            | warn              |
//! | tracked   | yes       | present | local == target            | revert            |
//! | tracked   | yes       | present | local == target, staged != | warn              |
//! | tracked   | yes       | present | local != target == HEAD    | skip              |
//! | tracked   | yes       | present | local != target != HEAD    | warn              |
//!
//! Both checkouts also reset the index, so they are only chosen when the
//! staged blob (if any) is HEAD's or the target's; the `staged !=` rows above
//! warn instead.
//!
//! The evaluator only reads: it holds a [`RepositoryState`], never a backend
//! able to write.

use crate::areas::backend::{HEAD, RepositoryState};
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::TargetBranch;
use crate::artifacts::errors::BackendError;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::reconcile::action::{Action, SkipReason, Warning};
use crate::artifacts::reconcile::candidate::{CandidateKind, FileCandidate};
use derive_new::new;
use std::path::Path;

#[derive(new)]
pub struct Evaluator<'r> {
    state: &'r dyn RepositoryState,
    workspace: &'r Workspace,
    target: &'r TargetBranch,
}

impl<'r> Evaluator<'r> {
    pub fn evaluate(&self, candidate: &FileCandidate) -> Result<Action, BackendError> {
        let path = candidate.path();

        let Some(target_oid) = self.state.resolve_blob(self.target.full_ref(), path)? else {
            return self.evaluate_missing_on_target(candidate);
        };

        if !self.workspace.is_present(path) {
            return self.evaluate_absent_locally(candidate, &target_oid);
        }

        let local_oid = self.state.hash_file(path)?;
        tracing::debug!(
            path = %path.display(),
            kind = %candidate.kind(),
            local = %local_oid,
            target = %target_oid,
            "comparing content"
        );

        if local_oid == target_oid {
            return match candidate.kind() {
                CandidateKind::ModifiedTracked => {
                    self.guard_index(path, Some(&target_oid), Action::Revert)
                }
                CandidateKind::Untracked => Ok(Action::Remove),
            };
        }

        match candidate.kind() {
            CandidateKind::Untracked => Ok(Action::Warn(Warning::HashMismatch {
                local: local_oid,
                target: target_oid,
                head: None,
            })),
            CandidateKind::ModifiedTracked => {
                let head_oid = self.state.resolve_blob(HEAD, path)?;
                tracing::debug!(path = %path.display(), head = ?head_oid, "comparing with HEAD");

                if head_oid.as_ref() == Some(&target_oid) {
                    Ok(Action::Skip(SkipReason::TargetMatchesHead))
                } else {
                    Ok(Action::Warn(Warning::HashMismatch {
                        local: local_oid,
                        target: target_oid,
                        head: head_oid,
                    }))
                }
            }
        }
    }

    fn evaluate_missing_on_target(&self, candidate: &FileCandidate) -> Result<Action, BackendError> {
        let path = candidate.path();
        tracing::debug!(path = %path.display(), kind = %candidate.kind(), "not on target");

        if !candidate.is_tracked() {
            return Ok(Action::Skip(SkipReason::NotOnTarget));
        }

        if !self.state.is_deleted(path)? {
            return Ok(Action::Skip(SkipReason::MissingOnTarget));
        }

        if self.state.path_exists_at(self.target.full_ref(), path)? {
            Ok(Action::Warn(Warning::LocalDeletedRemoteExists))
        } else {
            self.guard_index(path, None, Action::CheckoutDeleted)
        }
    }

    // A checkout from HEAD overwrites the index entry too. Let `checkout`
    // through only when the staged blob is HEAD's or the target's.
    fn guard_index(
        &self,
        path: &Path,
        target_oid: Option<&ObjectId>,
        checkout: Action,
    ) -> Result<Action, BackendError> {
        let Some(staged) = self.state.staged_blob(path)? else {
            return Ok(checkout);
        };
        if Some(&staged) == target_oid {
            return Ok(checkout);
        }

        let head_oid = self.state.resolve_blob(HEAD, path)?;
        tracing::debug!(path = %path.display(), %staged, head = ?head_oid, "comparing index");

        if head_oid.as_ref() == Some(&staged) {
            Ok(checkout)
        } else {
            Ok(Action::Warn(Warning::StagedChange { staged }))
        }
    }

    // The target has the file but the working tree does not. A deletion the
    // merge would clobber is worth a warning; anything else is only noted.
    fn evaluate_absent_locally(
        &self,
        candidate: &FileCandidate,
        target_oid: &ObjectId,
    ) -> Result<Action, BackendError> {
        let path = candidate.path();

        if candidate.is_tracked() && self.state.is_deleted(path)? {
            let head_oid = self.state.resolve_blob(HEAD, path)?;
            if head_oid.as_ref() != Some(target_oid) {
                return Ok(Action::Warn(Warning::LocalDeletedRemoteExists));
            }
        }

        Ok(Action::Skip(SkipReason::Vanished))
    }
}
