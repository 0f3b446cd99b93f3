//! Core shared values
//!
//! - `hasher`: content hashing strategies keying the object store
//! - `layout`: where the repository keeps its objects, refs and index

pub mod hasher;
pub mod layout;
