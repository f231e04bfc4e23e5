use crate::id::NodeId;
use thiserror::Error;

/// Errors from graph store mutations.
///
/// None of these are fatal to a running editor: callers log them and keep
/// going against the in-memory state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with this id is already in the store. Should not surface while
    /// the allocator guarantees freshness, but the check is the backstop for
    /// the allocator's decrement-on-release hazard.
    #[error("node id {0} already exists")]
    DuplicateId(NodeId),

    /// The root node was named as a deletion target.
    #[error("the root node cannot be deleted")]
    ForbiddenDeletion,
}
