//! A minimal version-control engine
//!
//! Content-addressed blobs and commits, a flat staging area, branches with a
//! symbolic or detached HEAD, and a three-way merge over single-parent
//! histories.
//!
//! - `areas`: the on-disk state (object store, refs, index, working tree)
//! - `artifacts`: value types and algorithms
//! - `commands`: the engine operations, one `impl Repository` block each
//! - `config`: repository layout, hashing strategy and commit clock
//! - `errors`: the error taxonomy

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
