//! Buffer Sizes
//!
//! Fixed capacities for stack/static allocation. No heap is used.

/// Pending driver events held by the cooperative inbox.
///
/// Four channels with at most one in-flight callback each, doubled to absorb
/// a burst of button presses between two loop turns.
pub const INBOX_CAPACITY: usize = 8;
