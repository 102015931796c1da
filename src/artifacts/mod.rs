//! Reconciliation data structures and algorithms
//!
//! - `branch`: target branch resolution and existence checks
//! - `core`: run options and output tags
//! - `errors`: fatal and backend error types
//! - `objects`: content hashes
//! - `reconcile`: candidates, the file evaluator and run summaries

pub mod branch;
pub mod core;
pub mod errors;
pub mod objects;
pub mod reconcile;
