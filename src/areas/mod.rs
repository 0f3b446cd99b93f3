//! Core repository components
//!
//! - `database`: content-addressed store for blobs and commits
//! - `index`: staging area for the next commit
//! - `refs`: HEAD and branch pointers
//! - `repository`: composition root the commands hang off
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
