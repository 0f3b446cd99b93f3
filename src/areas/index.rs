//! Staging area (index)
//!
//! The index tracks which file contents go into the next commit. Each commit
//! captures the whole index, so the index always describes a full snapshot
//! rather than a set of changes.
//!
//! ## Index File Format
//!
//! One `<path> <blob-hash>` line per staged file, ordered by path. Hashes
//! never contain spaces, so the last space on a line separates the two.

use crate::artifacts::objects::commit::FileBlobs;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, IoContext, Result};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.minigit/index`)
    path: Box<Path>,
    /// Staged files mapped by working-tree path
    entries: BTreeMap<String, ObjectId>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
        }
    }

    /// Load the index from disk; a missing or empty file is an empty index
    pub fn rehydrate(&mut self) -> Result<()> {
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .io_context(|| format!("Unable to read index file {}", self.path.display()))?;

        for line in content.lines().filter(|line| !line.is_empty()) {
            let (path, hash) = line.rsplit_once(' ').ok_or_else(|| Error::CorruptObject {
                oid: "index".to_string(),
                reason: format!("invalid index line '{line}'"),
            })?;

            self.entries
                .insert(path.to_string(), ObjectId::try_parse(hash.to_string())?);
        }

        Ok(())
    }

    /// Stage a file, replacing any earlier entry for the same path
    pub fn add(&mut self, path: String, oid: ObjectId) {
        self.entries.insert(path, oid);
    }

    /// Replace the whole index with a snapshot
    pub fn replace(&mut self, entries: FileBlobs) {
        self.entries = entries;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The staged snapshot, as a commit would record it
    pub fn snapshot(&self) -> FileBlobs {
        self.entries.clone()
    }

    pub fn write_updates(&mut self) -> Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .io_context(|| format!("Unable to open index file {}", self.path.display()))?;

        let content = self
            .entries
            .iter()
            .map(|(path, oid)| format!("{path} {oid}\n"))
            .collect::<String>();
        index_file
            .write_all(content.as_bytes())
            .io_context(|| format!("Unable to write index file {}", self.path.display()))?;

        Ok(())
    }
}
