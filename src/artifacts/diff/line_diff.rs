//! Positional line diff
//!
//! Lines are compared by position only: line N of the left text against line
//! N of the right text. There is no alignment, so a single inserted line
//! reports every following line as changed.

/// A line position where the two texts differ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// One-based line number
    pub line: usize,
    pub left: Option<String>,
    pub right: Option<String>,
}

pub fn line_diff(left: &str, right: &str) -> Vec<LineChange> {
    let mut left_lines = left.lines();
    let mut right_lines = right.lines();
    let mut changes = Vec::new();

    for line in 1.. {
        let (left, right) = (left_lines.next(), right_lines.next());
        if left.is_none() && right.is_none() {
            break;
        }

        if left != right {
            changes.push(LineChange {
                line,
                left: left.map(str::to_string),
                right: right.map(str::to_string),
            });
        }
    }

    changes
}
