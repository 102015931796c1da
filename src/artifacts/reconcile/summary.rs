use crate::artifacts::reconcile::action::{Action, SkipReason};

/// Totals of one run
///
/// In pretend mode the counts are those of the intended actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub reverted: usize,
    pub removed: usize,
    pub restored: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl Summary {
    pub fn record(&mut self, action: &Action) {
        match action {
            Action::Revert => self.reverted += 1,
            Action::Remove => self.removed += 1,
            Action::CheckoutDeleted => self.restored += 1,
            Action::Skip(SkipReason::MissingOnTarget) => self.errors += 1,
            Action::Skip(_) => {}
            Action::Warn(_) => self.warnings += 1,
        }
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Number of files changed (or, in pretend mode, that would be changed).
    pub fn changed(&self) -> usize {
        self.reverted + self.removed + self.restored
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "reverted {}, removed {}, restored {}, warnings {}, errors {}",
            self.reverted, self.removed, self.restored, self.warnings, self.errors
        )
    }
}
