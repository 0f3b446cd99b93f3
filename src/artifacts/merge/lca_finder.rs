//! Lowest common ancestor finder
//!
//! Every commit records a single parent, so each branch tip describes one
//! line of ancestry. The search walks the source tip's chain collecting every
//! hash, then walks the target tip's chain and returns the first hash already
//! collected.
//!
//! Merge commits only record the branch they were made on, so after repeated
//! criss-cross merges the base found here can be older than the one a
//! multi-parent walk would pick.
//!
//! ```rust,ignore
//! let finder = LcaFinder::new(|oid| Ok(database.get_commit(oid)?.parent().cloned()));
//! let base = finder.find_lca(&head_oid, &merge_oid)?;
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct LcaFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> Result<Option<ObjectId>>,
{
    /// Loads the parent of a commit; `None` for a root commit
    parent_loader: ParentLoaderFn,
}

impl<ParentLoaderFn> LcaFinder<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&ObjectId) -> Result<Option<ObjectId>>,
{
    pub fn new(parent_loader: ParentLoaderFn) -> Self {
        Self { parent_loader }
    }

    /// Nearest commit on the target's chain that is also on the source's
    /// chain; `None` when the histories share nothing
    pub fn find_lca(&self, source: &ObjectId, target: &ObjectId) -> Result<Option<ObjectId>> {
        let source_chain = self.ancestry(source)?;

        let mut visited = HashSet::new();
        let mut current = Some(target.clone());
        while let Some(oid) = current {
            if source_chain.contains(&oid) {
                tracing::debug!(%source, %target, lca = %oid, "found merge base");
                return Ok(Some(oid));
            }
            // a repeated hash means a corrupt, cyclic chain
            if !visited.insert(oid.clone()) {
                break;
            }
            current = (self.parent_loader)(&oid)?;
        }

        tracing::debug!(%source, %target, "no common ancestor");
        Ok(None)
    }

    /// Every commit on the parent chain starting at `tip`, `tip` included
    pub fn ancestry(&self, tip: &ObjectId) -> Result<HashSet<ObjectId>> {
        let mut chain = HashSet::new();
        let mut current = Some(tip.clone());

        while let Some(oid) = current {
            if !chain.insert(oid.clone()) {
                break;
            }
            current = (self.parent_loader)(&oid)?;
        }

        Ok(chain)
    }
}
