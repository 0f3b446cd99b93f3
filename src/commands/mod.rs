//! Command implementations
//!
//! - `porcelain`: user-facing version control workflows (add, commit, log, etc.)

pub mod porcelain;
