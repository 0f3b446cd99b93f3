//! Branch names and the HEAD pointer
//!
//! - `branch_name`: validated branch names
//! - `head`: symbolic or detached HEAD

pub mod branch_name;
pub mod head;

/// Names git itself refuses as refs; branch names become file names under
/// `refs/heads`, so the same rules keep them safe on disk.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
