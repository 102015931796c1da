use crate::areas::backend::Backend;
use crate::areas::git::GitCli;
use crate::areas::workspace::Workspace;
use crate::artifacts::errors::ReconcileError;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    backend: Box<dyn Backend>,
    workspace: Workspace,
}

impl Repository {
    /// Open the git repository containing `dir`, reporting to `writer`.
    pub fn open(dir: &Path, writer: Box<dyn std::io::Write>) -> Result<Self, ReconcileError> {
        let git = GitCli::discover(dir)?
            .ok_or_else(|| ReconcileError::NotARepository(dir.to_path_buf()))?;
        let path = git.root().to_path_buf();

        Ok(Self::new(&path, Box::new(git), writer))
    }

    pub fn new(path: &Path, backend: Box<dyn Backend>, writer: Box<dyn std::io::Write>) -> Self {
        Repository {
            path: path.into(),
            writer: RefCell::new(writer),
            backend,
            workspace: Workspace::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
