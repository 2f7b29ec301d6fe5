//! Cache Module
//!
//! The read-through core: a single-use reader that resolves content from
//! the object store or the origin and streams it to the caller.

mod reader;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export public types
pub use reader::CachingReader;
