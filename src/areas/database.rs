//! Content-addressed object store
//!
//! Blobs and commits are kept flat under the objects directory, one file per
//! object named after the hash of its payload. The store is append-only:
//! nothing is ever rewritten or collected, and storing an object that already
//! exists is a no-op.

use crate::artifacts::core::hasher::HashStrategy;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, IoContext, Result};
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
    hasher: Arc<dyn HashStrategy>,
}

impl Database {
    pub fn new(path: Box<Path>, hasher: Arc<dyn HashStrategy>) -> Self {
        Database { path, hasher }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn hasher(&self) -> &dyn HashStrategy {
        self.hasher.as_ref()
    }

    /// Store file content, returning its hash
    pub fn put_blob(&self, content: Bytes) -> Result<ObjectId> {
        self.store(&Blob::new(content))
    }

    pub fn get_blob(&self, object_id: &ObjectId) -> Result<Blob> {
        let content = self.load(object_id)?;
        Blob::deserialize(object_id, content)
    }

    /// Store a commit under its hash, computing the hash if it is still unset
    pub fn put_commit(&self, commit: &mut Commit) -> Result<ObjectId> {
        let oid = match commit.oid() {
            Some(oid) => oid.clone(),
            None => commit.compute_and_set_oid(self.hasher()),
        };

        self.write_if_missing(&oid, commit.serialize())?;
        Ok(oid)
    }

    /// Load a commit; its hash is restored from the lookup key
    pub fn get_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        let content = self.load(object_id)?;
        Commit::deserialize(object_id, content)
    }

    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        let oid = object.object_id(self.hasher());
        self.write_if_missing(&oid, object.serialize())?;

        Ok(oid)
    }

    pub fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.is_file() {
            return Err(Error::ObjectNotFound(object_id.clone()));
        }

        let content = std::fs::read(&object_path)
            .io_context(|| format!("Unable to read object file {}", object_path.display()))?;

        Ok(Bytes::from(content))
    }

    fn write_if_missing(&self, object_id: &ObjectId, content: Bytes) -> Result<()> {
        let object_path = self.path.join(object_id.to_path());

        // identical hash means identical content: nothing to do
        if object_path.exists() {
            tracing::trace!(oid = %object_id, "object already stored");
            return Ok(());
        }

        std::fs::create_dir_all(&self.path).io_context(|| {
            format!("Unable to create object directory {}", self.path.display())
        })?;

        self.write_object(object_path, content)?;
        tracing::debug!(oid = %object_id, "stored object");

        Ok(())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&object_path)
            .io_context(|| format!("Unable to open object file {}", object_path.display()))?;

        file.write_all(&object_content)
            .io_context(|| format!("Unable to write object file {}", object_path.display()))?;

        Ok(())
    }
}
