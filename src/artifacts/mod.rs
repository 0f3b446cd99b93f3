//! Data structures and algorithms
//!
//! - `branch`: branch names and HEAD
//! - `core`: hashing strategy and on-disk layout
//! - `diff`: line comparison of two files
//! - `merge`: merge base search and three-way resolution
//! - `objects`: object types (blob, commit) and their identifiers

pub mod branch;
pub mod core;
pub mod diff;
pub mod merge;
pub mod objects;
