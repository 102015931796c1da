//! Core repository components
//!
//! - `backend`: the version-control collaborator contract
//! - `git`: the production backend driving the `git` binary
//! - `repository`: high-level coordination of backend, workspace and output
//! - `workspace`: working directory file system operations

pub mod backend;
pub mod git;
pub mod repository;
pub mod workspace;
