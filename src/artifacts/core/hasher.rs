//! Content hashing strategies
//!
//! The object store is keyed by a deterministic hash of each object's
//! payload. The strategy is a value handed to the repository through
//! [`RepositoryConfig`](crate::config::RepositoryConfig), so repositories
//! using different strategies can live side by side in one process.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use sha1::{Digest, Sha1};
use std::fmt::Debug;

/// Seed of the djb2 hash
const DJB2_SEED: u64 = 5381;

/// A deterministic, process-independent hash over raw bytes
pub trait HashStrategy: Debug + Send + Sync {
    /// Name used to select the strategy from configuration
    fn name(&self) -> &'static str;

    fn hash(&self, data: &[u8]) -> ObjectId;
}

/// 64-bit djb2 (`h = h * 33 + byte`), rendered as 16 hex digits
///
/// Not collision resistant; good enough for a single user's working tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Djb2Hash;

impl HashStrategy for Djb2Hash {
    fn name(&self) -> &'static str {
        "djb2"
    }

    fn hash(&self, data: &[u8]) -> ObjectId {
        let hash = data.iter().fold(DJB2_SEED, |hash, &byte| {
            (hash << 5).wrapping_add(hash).wrapping_add(byte as u64)
        });

        ObjectId::try_parse(format!("{hash:016x}"))
            .expect("a 64-bit value always renders as 16 hex digits")
    }
}

/// SHA-1, rendered as 40 hex digits
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Hash;

impl HashStrategy for Sha1Hash {
    fn name(&self) -> &'static str {
        "sha1"
    }

    fn hash(&self, data: &[u8]) -> ObjectId {
        let mut hasher = Sha1::new();
        hasher.update(data);

        let digest = hasher.finalize();
        ObjectId::try_parse(format!("{digest:x}"))
            .expect("a SHA-1 digest always renders as 40 hex digits")
    }
}

/// Look up a strategy by the name it reports
pub fn strategy_by_name(name: &str) -> Result<Box<dyn HashStrategy>> {
    match name {
        "djb2" => Ok(Box::new(Djb2Hash)),
        "sha1" => Ok(Box::new(Sha1Hash)),
        other => Err(Error::InvalidConfig(format!(
            "unknown hash strategy '{other}' (expected 'djb2' or 'sha1')"
        ))),
    }
}
