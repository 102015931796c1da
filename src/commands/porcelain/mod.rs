//! Porcelain commands (user-facing operations)
//!
//! - `reconcile`: discard local changes that already match the target branch

pub mod reconcile;
