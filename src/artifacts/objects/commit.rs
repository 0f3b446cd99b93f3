//! Commit object
//!
//! A commit is an immutable snapshot of every tracked file together with its
//! message, creation time and parent link. Each commit stores the full file
//! map, never a delta against its parent.
//!
//! ## Format
//!
//! ```text
//! message:<message>
//! timestamp:<YYYY-MM-DD HH:MM:SS>
//! parent:<parent-hash or empty for a root commit>
//! files:<name1>=<hash1>,<name2>=<hash2>,...
//! ```
//!
//! Files are listed in filename order, so equal snapshots serialize (and hash)
//! identically. Filenames may not contain `,`, `=` or line breaks.
//!
//! The commit's own hash is not part of the payload: it is the object store
//! key, and the loader restores it from that key.

use crate::artifacts::core::hasher::HashStrategy;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use bytes::Bytes;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Snapshot of the tracked files: working-tree path to blob hash
pub type FileBlobs = BTreeMap<String, ObjectId>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Storage key; unset until computed or restored by the loader
    oid: Option<ObjectId>,
    /// Parent commit IDs, oldest link first; empty for a root commit.
    /// Only the first entry is ever populated or persisted.
    parents: Vec<ObjectId>,
    timestamp: NaiveDateTime,
    message: String,
    files: FileBlobs,
}

impl Commit {
    pub fn new(
        parent: Option<ObjectId>,
        timestamp: NaiveDateTime,
        message: String,
        files: FileBlobs,
    ) -> Self {
        Commit {
            oid: None,
            parents: parent.into_iter().collect(),
            timestamp,
            message,
            files,
        }
    }

    /// Hash the canonical payload and remember it as this commit's ID
    pub fn compute_and_set_oid(&mut self, hasher: &dyn HashStrategy) -> ObjectId {
        let oid = self.object_id(hasher);
        self.oid = Some(oid.clone());
        oid
    }

    pub fn oid(&self) -> Option<&ObjectId> {
        self.oid.as_ref()
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn files(&self) -> &FileBlobs {
        &self.files
    }

    pub fn blob_for(&self, path: &str) -> Option<&ObjectId> {
        self.files.get(path)
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        let files = self
            .files
            .iter()
            .map(|(name, oid)| format!("{name}={oid}"))
            .collect::<Vec<_>>()
            .join(",");
        let parent = self.parent().map(ObjectId::as_ref).unwrap_or_default();

        Bytes::from(format!(
            "message:{}\ntimestamp:{}\nparent:{}\nfiles:{}\n",
            self.message,
            self.readable_timestamp(),
            parent,
            files
        ))
    }
}

impl Unpackable for Commit {
    fn deserialize(oid: &ObjectId, data: Bytes) -> Result<Self> {
        let corrupt = |reason: String| Error::CorruptObject {
            oid: oid.to_string(),
            reason,
        };

        let content =
            std::str::from_utf8(&data).map_err(|e| corrupt(format!("not valid UTF-8: {e}")))?;

        let mut message = None;
        let mut timestamp = None;
        let mut parent = None;
        let mut files = None;

        for line in content.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            match key {
                "message" => message = Some(value.to_string()),
                "timestamp" => {
                    let parsed = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
                        .map_err(|e| corrupt(format!("invalid timestamp '{value}': {e}")))?;
                    timestamp = Some(parsed);
                }
                "parent" if value.is_empty() => parent = Some(None),
                "parent" => parent = Some(Some(ObjectId::try_parse(value.to_string())?)),
                "files" => files = Some(parse_file_blobs(value).map_err(corrupt)?),
                _ => {}
            }
        }

        let mut commit = Commit::new(
            parent.ok_or_else(|| corrupt("missing parent line".to_string()))?,
            timestamp.ok_or_else(|| corrupt("missing timestamp line".to_string()))?,
            message.ok_or_else(|| corrupt("missing message line".to_string()))?,
            files.ok_or_else(|| corrupt("missing files line".to_string()))?,
        );
        commit.oid = Some(oid.clone());

        Ok(commit)
    }
}

impl Object for Commit {}

fn parse_file_blobs(value: &str) -> std::result::Result<FileBlobs, String> {
    value
        .split(',')
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, hash) = entry
                .split_once('=')
                .ok_or_else(|| format!("invalid file entry '{entry}'"))?;
            let oid = ObjectId::try_parse(hash.to_string()).map_err(|e| e.to_string())?;

            Ok((name.to_string(), oid))
        })
        .collect()
}
