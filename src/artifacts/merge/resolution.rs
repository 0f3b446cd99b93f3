//! Per-file three-way resolution
//!
//! Each file is classified from its content at the merge base, on the current
//! tip and on the target tip. A version missing from the base never counts as
//! equal to anything, so a file added on both sides with different content is
//! a conflict.
//!
//! | current | target | outcome                                             |
//! |---------|--------|-----------------------------------------------------|
//! | yes     | yes    | equal sides or one side equal to base: clean        |
//! | yes     | yes    | all three differ: conflict                          |
//! | yes     | no     | current equal to base: deleted, otherwise current   |
//! | no      | yes    | target equal to base: deleted, otherwise target     |
//! | no      | no     | absent                                              |

use bytes::Bytes;

/// Outcome of merging a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Both sides are reconciled to this content
    Clean(Bytes),
    /// Both sides changed the file differently
    Conflict { current: Bytes, target: Bytes },
    /// One side deleted a file the other left untouched
    Delete,
    /// Neither side has the file
    Absent,
}

impl Resolution {
    pub fn resolve(base: Option<&Bytes>, current: Option<&Bytes>, target: Option<&Bytes>) -> Self {
        let same_as_base = |content: &Bytes| base.is_some_and(|base| base == content);

        match (current, target) {
            (Some(current), Some(target)) if current == target => Self::Clean(current.clone()),
            (Some(current), Some(target)) if same_as_base(current) => Self::Clean(target.clone()),
            (Some(current), Some(target)) if same_as_base(target) => Self::Clean(current.clone()),
            (Some(current), Some(target)) => Self::Conflict {
                current: current.clone(),
                target: target.clone(),
            },
            (Some(current), None) if same_as_base(current) => Self::Delete,
            (Some(current), None) => Self::Clean(current.clone()),
            (None, Some(target)) if same_as_base(target) => Self::Delete,
            (None, Some(target)) => Self::Clean(target.clone()),
            (None, None) => Self::Absent,
        }
    }
}
