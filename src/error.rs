//! Errors reported by the crate's cursors.

/// Returned by a cursor's `advance` once every element has been visited.
///
/// Check `has_next` before advancing to avoid it.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("cursor advanced past its last element")]
pub struct Exhausted;
