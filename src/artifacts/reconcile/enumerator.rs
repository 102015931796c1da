//! Candidate enumeration
//!
//! Modified tracked files come first, then untracked ones, each in the order
//! the backend lists them. A path is yielded at most once: should the backend
//! report it twice, or in both lists, the first occurrence wins.

use crate::areas::backend::RepositoryState;
use crate::artifacts::errors::BackendError;
use crate::artifacts::reconcile::candidate::{CandidateKind, FileCandidate};
use std::collections::HashSet;
use std::path::PathBuf;

pub struct Candidates {
    tracked: std::vec::IntoIter<PathBuf>,
    untracked: std::vec::IntoIter<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl Candidates {
    /// Query the backend for both candidate lists.
    ///
    /// Each call starts from a fresh listing; nothing is cached between runs.
    pub fn enumerate(state: &dyn RepositoryState) -> Result<Self, BackendError> {
        let tracked = state.modified_paths()?;
        let untracked = state.untracked_paths()?;
        tracing::debug!(
            tracked = tracked.len(),
            untracked = untracked.len(),
            "enumerated candidates"
        );

        Ok(Self::from_paths(tracked, untracked))
    }

    pub fn from_paths(tracked: Vec<PathBuf>, untracked: Vec<PathBuf>) -> Self {
        Candidates {
            tracked: tracked.into_iter(),
            untracked: untracked.into_iter(),
            seen: HashSet::new(),
        }
    }

    fn next_path(&mut self) -> Option<(PathBuf, CandidateKind)> {
        self.tracked
            .next()
            .map(|path| (path, CandidateKind::ModifiedTracked))
            .or_else(|| {
                self.untracked
                    .next()
                    .map(|path| (path, CandidateKind::Untracked))
            })
    }
}

impl Iterator for Candidates {
    type Item = FileCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, kind)) = self.next_path() {
            if self.seen.insert(path.clone()) {
                return Some(FileCandidate::new(path, kind));
            }
            tracing::debug!(path = %path.display(), "skipping duplicate candidate");
        }

        None
    }
}
