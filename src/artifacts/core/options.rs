use derive_new::new;

/// Configuration of a single run
///
/// Built once from the parsed command line and passed by reference to the
/// reconciler. Nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Options {
    /// Report intended actions without touching the working tree
    pub pretend: bool,
    /// Emit diagnostic tracing on stderr
    pub debug: bool,
    /// Branch to compare against; the upstream of the current branch when absent
    pub branch: Option<String>,
}
