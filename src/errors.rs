//! Error taxonomy for repository operations
//!
//! Every engine operation returns [`Result`], so call sites decide explicitly
//! whether to recover or propagate. A merge that stops on conflicts is not an
//! error; see [`crate::commands::porcelain::merge::MergeOutcome`].

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not a minigit repository (or any parent): {0}. Run 'minigit init' first")]
    NotARepository(PathBuf),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("branch '{0}' already exists")]
    BranchExists(String),

    #[error("branch '{0}' does not exist")]
    BranchMissing(String),

    #[error("neither branch '{0}' nor commit '{0}' found")]
    BranchOrCommitNotFound(String),

    #[error("no commits yet: {0}")]
    NoCommitsYet(String),

    #[error("nothing to commit, working tree clean")]
    NothingToCommit,

    #[error("could not find a common ancestor of {0} and {1}")]
    NoCommonAncestor(ObjectId, ObjectId),

    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid path {path}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            context: "i/o failure".to_string(),
            source,
        }
    }
}

/// Attach a description of the failed action to an I/O error
pub trait IoContext<T> {
    fn io_context<F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> IoContext<T> for std::result::Result<T, std::io::Error> {
    fn io_context<F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| Error::Io {
            context: context(),
            source,
        })
    }
}
