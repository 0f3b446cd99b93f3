//! References (HEAD and branches)
//!
//! References are human-readable names pointing to commits.
//!
//! - HEAD: the current position, either symbolic (`ref: refs/heads/<branch>`)
//!   or detached (a raw commit hash)
//! - Branches: `refs/heads/<branch>` files holding a raw commit hash, or a
//!   lone newline while the branch is unborn
//!
//! ## File Format
//!
//! Every ref file holds a single line terminated by `\n`. Symbolic targets are
//! resolved relative to the repository directory.
//!
//! No locking is performed: one writer at a time is assumed.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, IoContext, Result};
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference file inside the refs directory
pub const HEAD_REF_NAME: &str = "HEAD";

static SYMREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SYMREF_REGEX).expect("symref pattern is a valid regex"));

#[derive(Debug)]
pub struct Refs {
    /// Path to the repository directory (typically `.minigit`)
    path: Box<Path>,
}

/// Content of a ref file
#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef { ref_path: String },
    Oid(ObjectId),
}

impl SymRefOrOid {
    /// Read a ref file; `None` when the file is missing or holds no hash
    fn read_symref_or_oid(path: &Path) -> Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .io_context(|| format!("failed to read ref file at {}", path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        match SYMREF.captures(content) {
            Some(symref_match) => Ok(Some(SymRefOrOid::SymRef {
                ref_path: symref_match[1].to_string(),
            })),
            None => Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(
                content.to_string(),
            )?))),
        }
    }
}

impl Refs {
    pub fn new(path: Box<Path>) -> Self {
        Refs { path }
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    pub fn head_path(&self) -> PathBuf {
        self.refs_path().join(HEAD_REF_NAME)
    }

    fn branch_path(&self, name: &BranchName) -> PathBuf {
        self.path.join(name.to_ref_path())
    }

    /// Where HEAD points, without resolving the branch
    pub fn head(&self) -> Result<Head> {
        match SymRefOrOid::read_symref_or_oid(&self.head_path())? {
            Some(SymRefOrOid::SymRef { ref_path }) => {
                Ok(Head::Symbolic(BranchName::try_parse_ref_path(&ref_path)?))
            }
            Some(SymRefOrOid::Oid(oid)) => Ok(Head::Detached(oid)),
            None => Err(Error::NotARepository(self.head_path())),
        }
    }

    /// Resolve HEAD to a commit hash; `None` while the current branch is unborn
    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        match self.head()? {
            Head::Symbolic(branch) => self.read_branch(&branch),
            Head::Detached(oid) => Ok(Some(oid)),
        }
    }

    /// Move HEAD to a new commit, through the current branch when symbolic
    pub fn update_head(&self, oid: &ObjectId) -> Result<()> {
        match self.head()? {
            Head::Symbolic(branch) => self.write_ref_file(&self.branch_path(&branch), oid.as_ref()),
            Head::Detached(_) => self.write_ref_file(&self.head_path(), oid.as_ref()),
        }
    }

    /// Point HEAD at a branch or detach it at a commit
    pub fn set_head(&self, head: &Head) -> Result<()> {
        match head {
            Head::Symbolic(branch) => {
                self.write_ref_file(&self.head_path(), &format!("ref: {}", branch.to_ref_path()))
            }
            Head::Detached(oid) => self.write_ref_file(&self.head_path(), oid.as_ref()),
        }
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    /// Read a branch tip; `None` while the branch is unborn
    pub fn read_branch(&self, name: &BranchName) -> Result<Option<ObjectId>> {
        let branch_path = self.branch_path(name);

        if !branch_path.is_file() {
            return Err(Error::BranchMissing(name.to_string()));
        }

        match SymRefOrOid::read_symref_or_oid(&branch_path)? {
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            Some(SymRefOrOid::SymRef { ref_path }) => Err(Error::CorruptObject {
                oid: name.to_string(),
                reason: format!("branch file points at another ref '{ref_path}'"),
            }),
            None => Ok(None),
        }
    }

    /// Create a branch that does not have any commit yet
    pub fn create_unborn_branch(&self, name: &BranchName) -> Result<()> {
        self.write_ref_file(&self.branch_path(name), "")
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> Result<()> {
        if self.branch_exists(name) {
            return Err(Error::BranchExists(name.to_string()));
        }

        self.write_ref_file(&self.branch_path(name), source_oid.as_ref())
    }

    /// All branches, in name order
    pub fn list_branches(&self) -> Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                BranchName::try_parse(name).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn write_ref_file(&self, path: &Path, raw_ref: &str) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "ref file has no parent directory".to_string(),
            })?;
        std::fs::create_dir_all(parent).io_context(|| {
            format!("failed to create parent directories for ref file at {}", path.display())
        })?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .io_context(|| format!("failed to open ref file at {}", path.display()))?;
        writeln!(ref_file, "{raw_ref}")
            .io_context(|| format!("failed to write ref file at {}", path.display()))?;

        Ok(())
    }
}
