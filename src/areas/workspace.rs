use anyhow::Context;
use std::path::Path;

/// Working directory of the repository
///
/// Paths handed to the workspace are relative to its root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether anything (file, symlink, directory) exists at `file_path`.
    ///
    /// Dangling symlinks count as present.
    pub fn is_present(&self, file_path: &Path) -> bool {
        std::fs::symlink_metadata(self.path.join(file_path)).is_ok()
    }

    /// Delete a file and any parent directories the deletion left empty.
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        std::fs::remove_file(self.path.join(file_path))
            .with_context(|| format!("Failed to remove file: {:?}", file_path))?;

        self.prune_empty_parents(file_path);

        Ok(())
    }

    // Walk up from the file's directory towards the root, stopping at the
    // first directory that is not empty. The root itself is never removed.
    fn prune_empty_parents(&self, file_path: &Path) {
        for dir in file_path
            .ancestors()
            .skip(1)
            .filter(|dir| !dir.as_os_str().is_empty())
        {
            if std::fs::remove_dir(self.path.join(dir)).is_err() {
                break;
            }
            tracing::debug!(dir = %dir.display(), "removed empty directory");
        }
    }
}
