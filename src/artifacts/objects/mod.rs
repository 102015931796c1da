//! Content hashes
//!
//! Every file state the reconciler compares, whether on disk, at HEAD or at
//! the tip of the target branch, is identified by its git blob object id.

pub mod object_id;

/// Length of a SHA-1 object id in hexadecimal format
pub const SHA1_OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-256 object id in hexadecimal format
pub const SHA256_OBJECT_ID_LENGTH: usize = 64;

/// Length of an abbreviated object id
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
