//! Command implementations
//!
//! Only porcelain lives here: the reconcile command composes branch
//! resolution, candidate enumeration and evaluation into a single run.

pub mod porcelain;
