use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CandidateKind {
    /// Tracked file whose working copy differs from the current commit
    ModifiedTracked,
    /// File in the working tree that is neither tracked nor ignored
    Untracked,
}

impl From<&CandidateKind> for &str {
    fn from(kind: &CandidateKind) -> Self {
        match kind {
            CandidateKind::ModifiedTracked => "tracked",
            CandidateKind::Untracked => "untracked",
        }
    }
}

impl std::fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind_str: &str = self.into();
        write!(f, "{}", kind_str)
    }
}

/// A path the reconciler has to decide about
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct FileCandidate {
    /// Path relative to the repository root
    path: PathBuf,
    kind: CandidateKind,
}

impl FileCandidate {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> CandidateKind {
        self.kind
    }

    pub fn is_tracked(&self) -> bool {
        self.kind == CandidateKind::ModifiedTracked
    }
}
