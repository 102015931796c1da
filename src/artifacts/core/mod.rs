//! Shared types used across a run
//!
//! - `options`: the immutable run configuration
//! - `tag`: the stable prefixes of report lines

pub mod options;
pub mod tag;

use std::borrow::Cow;
use std::path::Path;

/// Render a repository-relative path for a single report line.
///
/// Paths containing control characters (a newline in a file name, for
/// instance) are quoted and escaped so every event stays on one line.
pub fn display_path(path: &Path) -> Cow<'_, str> {
    let lossy = path.to_string_lossy();

    if lossy.chars().any(char::is_control) {
        Cow::Owned(format!("{:?}", lossy.as_ref()))
    } else {
        lossy
    }
}
