//! Repository path layout
//!
//! ```text
//! <root>/.minigit/
//! ├── objects/<hash>       one file per blob or commit
//! ├── refs/HEAD            "ref: refs/heads/<branch>\n" or a raw commit hash
//! ├── refs/heads/<branch>  raw commit hash, or a lone newline when unborn
//! └── index                one "<path> <hash>" line per staged file
//! ```

use std::path::{Path, PathBuf};

pub const DEFAULT_REPOSITORY_DIR: &str = ".minigit";
pub const DEFAULT_BRANCH: &str = "master";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLayout {
    /// Name of the repository directory inside the working tree
    dir_name: String,
    /// Branch HEAD points at after `init`
    default_branch: String,
}

impl RepositoryLayout {
    pub fn new(dir_name: impl Into<String>, default_branch: impl Into<String>) -> Self {
        RepositoryLayout {
            dir_name: dir_name.into(),
            default_branch: default_branch.into(),
        }
    }

    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }

    pub fn repository_path(&self, root: &Path) -> PathBuf {
        root.join(&self.dir_name)
    }

    pub fn objects_path(&self, root: &Path) -> PathBuf {
        self.repository_path(root).join("objects")
    }

    pub fn refs_path(&self, root: &Path) -> PathBuf {
        self.repository_path(root).join("refs")
    }

    pub fn index_path(&self, root: &Path) -> PathBuf {
        self.repository_path(root).join("index")
    }
}

impl Default for RepositoryLayout {
    fn default() -> Self {
        RepositoryLayout::new(DEFAULT_REPOSITORY_DIR, DEFAULT_BRANCH)
    }
}
