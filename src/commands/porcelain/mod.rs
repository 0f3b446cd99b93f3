//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block. Commands report to the
//! repository's writer and return what they produced, so callers can use the
//! engine without parsing its output.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `log`: Show commit history
//! - `branch`: Create or list branches
//! - `checkout`: Switch branches or detach at a commit
//! - `merge`: Three-way merge of another branch into HEAD
//! - `diff`: Compare two files line by line

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
