//! Node identity: every AST node gets a unique id at construction.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier stamped on every AST node when it is built.
///
/// Ids are for cross-referencing and debug display only; structural
/// ownership is always expressed through the tree itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generator of unique node ids.
///
/// Passed explicitly to every node constructor instead of living in
/// process-global state, so tests get deterministic id sequences.
/// Safe to share across construction threads; two calls never return
/// the same id for the lifetime of the generator.
#[derive(Debug, Default)]
pub struct IdGen {
    next: AtomicU64,
}

impl IdGen {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Hand out the next id. Never fails; the 64-bit space does not
    /// wrap for any realistic program size.
    pub fn next_id(&self) -> NodeId {
        // Relaxed is enough: ids only need to be distinct, they do not
        // order any other memory.
        NodeId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
