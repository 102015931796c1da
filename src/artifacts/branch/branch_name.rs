use crate::artifacts::branch::{LOCAL_REF_PREFIX, REMOTE_REF_PREFIX};
use derive_new::new;

/// Where a branch reference lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// `refs/heads/*`
    Local,
    /// `refs/remotes/*`
    RemoteTracking,
}

impl RefKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            RefKind::Local => LOCAL_REF_PREFIX,
            RefKind::RemoteTracking => REMOTE_REF_PREFIX,
        }
    }

    /// Kind of a fully qualified reference, if it names a branch at all.
    pub fn of_full_ref(full_ref: &str) -> Option<Self> {
        [RefKind::Local, RefKind::RemoteTracking]
            .into_iter()
            .find(|kind| {
                full_ref
                    .strip_prefix(kind.prefix())
                    .is_some_and(|short| !short.is_empty())
            })
    }
}

/// A branch verified to exist, against which every candidate is compared
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct TargetBranch {
    /// The name as given by the user, or the upstream name
    name: String,
    /// Fully qualified reference (`refs/heads/dev`, `refs/remotes/origin/dev`)
    full_ref: String,
    kind: RefKind,
}

impl TargetBranch {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unambiguous revision used for tree lookups.
    pub fn full_ref(&self) -> &str {
        &self.full_ref
    }

    pub fn kind(&self) -> RefKind {
        self.kind
    }

    /// Short display form, without the `refs/heads/` or `refs/remotes/` prefix.
    pub fn short_name(&self) -> &str {
        self.full_ref
            .strip_prefix(self.kind.prefix())
            .unwrap_or(&self.full_ref)
    }
}

impl std::fmt::Display for TargetBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
