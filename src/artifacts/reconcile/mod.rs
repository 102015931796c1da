//! Per-file reconciliation
//!
//! - `candidate`: a path worth looking at, tagged tracked or untracked
//! - `enumerator`: produces the candidates of one run
//! - `action`: what to do with a candidate, and how to report it
//! - `evaluator`: the decision procedure mapping a candidate to an action
//! - `summary`: totals reported at the end of a run

pub mod action;
pub mod candidate;
pub mod enumerator;
pub mod evaluator;
pub mod summary;
