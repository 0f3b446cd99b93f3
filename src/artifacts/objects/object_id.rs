//! Object identifier (content hash)
//!
//! Object IDs are lowercase hexadecimal strings produced by the repository's
//! [`HashStrategy`](crate::artifacts::core::hasher::HashStrategy): 16
//! characters for the default djb2 hash, 40 for SHA-1.
//!
//! ## Storage
//!
//! Objects are stored flat, one file per object, at `<objects-dir>/<oid>`.

use crate::artifacts::objects::{MAX_OBJECT_ID_LENGTH, MIN_OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Content hash identifying a blob or commit in the object store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Accepts lowercase hex strings whose length lies between the shortest
    /// and the longest hash any strategy produces.
    pub fn try_parse(id: String) -> Result<Self> {
        if !(MIN_OBJECT_ID_LENGTH..=MAX_OBJECT_ID_LENGTH).contains(&id.len()) {
            return Err(Error::InvalidObjectId(id));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(Error::InvalidObjectId(id));
        }
        Ok(Self(id))
    }

    /// File name of the object inside the objects directory
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0
            .get(..SHORT_OBJECT_ID_LENGTH)
            .unwrap_or(&self.0)
            .to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
