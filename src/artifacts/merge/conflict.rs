//! Conflict markers
//!
//! ```text
//! <<<<<<< HEAD
//! <current content>
//! =======
//! <target content>
//! >>>>>>> <branch>
//! ```
//!
//! A line break is inserted after each side unless its content already ends
//! with one, so markers always start on their own line.

use bytes::{BufMut, Bytes, BytesMut};

pub const CURRENT_MARKER: &str = "<<<<<<< HEAD";
pub const SEPARATOR_MARKER: &str = "=======";
pub const TARGET_MARKER: &str = ">>>>>>>";

#[derive(Debug, Clone, Copy)]
pub struct ConflictMarkers<'b> {
    branch: &'b str,
}

impl<'b> ConflictMarkers<'b> {
    pub fn new(branch: &'b str) -> Self {
        ConflictMarkers { branch }
    }

    /// File content holding both sides between markers
    pub fn wrap(&self, current: &[u8], target: &[u8]) -> Bytes {
        let mut content = BytesMut::with_capacity(
            current.len() + target.len() + self.branch.len() + 32,
        );

        content.put_slice(CURRENT_MARKER.as_bytes());
        content.put_u8(b'\n');
        Self::put_side(&mut content, current);
        content.put_slice(SEPARATOR_MARKER.as_bytes());
        content.put_u8(b'\n');
        Self::put_side(&mut content, target);
        content.put_slice(format!("{TARGET_MARKER} {}\n", self.branch).as_bytes());

        content.freeze()
    }

    fn put_side(content: &mut BytesMut, side: &[u8]) {
        content.put_slice(side);
        if !side.ends_with(b"\n") {
            content.put_u8(b'\n');
        }
    }
}
