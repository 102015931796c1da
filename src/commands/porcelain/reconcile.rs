use crate::areas::backend::RepositoryState;
use crate::areas::repository::Repository;
use crate::artifacts::branch::resolver;
use crate::artifacts::core::display_path;
use crate::artifacts::core::options::Options;
use crate::artifacts::core::tag::Tag;
use crate::artifacts::errors::ReconcileError;
use crate::artifacts::reconcile::action::Action;
use crate::artifacts::reconcile::candidate::FileCandidate;
use crate::artifacts::reconcile::enumerator::Candidates;
use crate::artifacts::reconcile::evaluator::Evaluator;
use crate::artifacts::reconcile::summary::Summary;
use anyhow::Context;
use std::fmt::Display;

impl Repository {
    /// Discard local changes that already match the target branch.
    ///
    /// Fails only when the target branch cannot be resolved or the candidate
    /// lists cannot be obtained; problems with individual files are reported
    /// and counted in the returned summary.
    pub fn reconcile(&self, options: &Options) -> Result<Summary, ReconcileError> {
        let state: &dyn RepositoryState = self.backend();

        let target = resolver::resolve(state, options.branch.as_deref())?;
        self.report(Tag::Info, format_args!("comparing against {target}"))?;
        if options.pretend {
            self.report(Tag::Info, "pretend mode: no files will be changed")?;
        }

        let candidates = Candidates::enumerate(state)?;
        let evaluator = Evaluator::new(state, self.workspace(), &target);
        let mut summary = Summary::default();

        for candidate in candidates {
            let action = match evaluator.evaluate(&candidate) {
                Ok(action) => action,
                Err(error) => {
                    summary.record_error();
                    self.report_failure(&candidate, &error)?;
                    continue;
                }
            };
            tracing::debug!(path = %candidate.path().display(), ?action, "evaluated");

            if let Some((tag, message)) = action.report_line(candidate.path(), &target) {
                self.report(tag, message)?;
            }

            match self.apply(&candidate, &action, options) {
                Ok(()) => summary.record(&action),
                Err(error) => {
                    summary.record_error();
                    self.report_failure(&candidate, format_args!("{error:#}"))?;
                }
            }
        }

        self.report(Tag::Info, summary)?;
        Ok(summary)
    }

    // Every change to the working tree goes through here, so pretend mode
    // only needs checking once.
    fn apply(
        &self,
        candidate: &FileCandidate,
        action: &Action,
        options: &Options,
    ) -> anyhow::Result<()> {
        if options.pretend || !action.is_mutation() {
            return Ok(());
        }

        let path = candidate.path();
        match action {
            Action::Revert | Action::CheckoutDeleted => self
                .backend()
                .checkout_from_head(path)
                .with_context(|| format!("Failed to check out {:?} from HEAD", path))?,
            Action::Remove => self.workspace().remove_file(path)?,
            Action::Skip(_) | Action::Warn(_) => {}
        }

        Ok(())
    }

    fn report(&self, tag: Tag, message: impl Display) -> std::io::Result<()> {
        writeln!(self.writer(), "{} {}", tag, message)
    }

    fn report_failure(&self, candidate: &FileCandidate, error: impl Display) -> std::io::Result<()> {
        self.report(
            Tag::Error,
            format_args!("{}: {}", display_path(candidate.path()), error),
        )
    }
}
