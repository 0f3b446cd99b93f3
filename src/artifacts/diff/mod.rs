//! File comparison
//!
//! - `line_diff`: positional line-by-line comparison of two texts

pub mod line_diff;
