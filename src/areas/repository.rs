use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::config::RepositoryConfig;
use crate::errors::{Error, IoContext, Result};
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    config: RepositoryConfig,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the working tree at `path`; the repository itself may not exist yet
    pub fn new(
        path: impl AsRef<Path>,
        writer: Box<dyn std::io::Write>,
        config: RepositoryConfig,
    ) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            std::fs::create_dir_all(path)
                .io_context(|| format!("Unable to create directory {}", path.display()))?;
        }
        let path = path
            .canonicalize()
            .io_context(|| format!("Unable to resolve path {}", path.display()))?;

        let layout = &config.layout;
        let index = Index::new(layout.index_path(&path).into_boxed_path());
        let database = Database::new(
            layout.objects_path(&path).into_boxed_path(),
            config.hasher.clone(),
        );
        let workspace = Workspace::new(path.clone().into_boxed_path(), layout.dir_name());
        let refs = Refs::new(layout.repository_path(&path).into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            config,
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_path(&self) -> std::path::PathBuf {
        self.config.layout.repository_path(&self.path)
    }

    pub fn is_initialized(&self) -> bool {
        self.repository_path().is_dir()
    }

    pub fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(Error::NotARepository(self.path.to_path_buf()))
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
