//! Merge algorithms
//!
//! - `lca_finder`: merge base search over single-parent chains
//! - `resolution`: per-file three-way classification
//! - `conflict`: conflict marker synthesis

pub mod conflict;
pub mod lca_finder;
pub mod resolution;
