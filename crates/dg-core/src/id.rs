//! Node identifiers and the allocator that issues them.
//!
//! Ids are string-encoded positive integers; the root node is always `"1"`.
//! The allocator is an explicit value owned by the editor session — it is
//! passed by `&mut` to whoever needs a fresh id, never a process-wide global.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The id of a node in the graph. String-encoded positive integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// The permanent root node, id `"1"`. Never a deletion target.
    pub fn root() -> Self {
        NodeId("1".to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == "1"
    }

    pub fn from_index(n: u64) -> Self {
        NodeId(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

/// Issues node ids as a plain incrementing counter.
///
/// `counter` holds the highest id handed out so far; the root node `"1"`
/// counts as pre-issued, so the first `next()` returns `"2"`.
///
/// This is a counter, not a free list: `release` steps the counter back one
/// regardless of which id was released. That matches creation order only when
/// deletions hit the newest node — an out-of-order deletion lets `next()`
/// re-issue an id that is still live in the graph. The store's duplicate
/// check is the backstop for that case.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    counter: u64,
}

impl IdAllocator {
    const INITIAL: u64 = 1;

    pub fn new() -> Self {
        Self {
            counter: Self::INITIAL,
        }
    }

    /// Hand out the next id. Strictly increasing between releases.
    pub fn next(&mut self) -> NodeId {
        self.counter += 1;
        NodeId::from_index(self.counter)
    }

    /// Give an id back. Decrements the counter by one unconditionally —
    /// `id` is only used for logging, not matched against a pool.
    /// Never drops below the initial value.
    pub fn release(&mut self, id: &NodeId) {
        let next = self.counter.saturating_sub(1).max(Self::INITIAL);
        log::debug!("release {id}: counter {} -> {next}", self.counter);
        self.counter = next;
    }

    /// Seed the counter from a loaded snapshot's node count, so the next
    /// issued id continues after the highest loaded one.
    pub fn reseed(&mut self, node_count: u64) {
        self.counter = node_count.max(Self::INITIAL);
    }

    /// Back to the initial state: only the root id counts as issued.
    pub fn reset(&mut self) {
        self.counter = Self::INITIAL;
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
