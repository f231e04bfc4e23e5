//! The authoritative in-memory graph store.
//!
//! Ordered node and edge sequences plus the mutation operations the editor
//! needs. The store never talks to persistence itself — every successful
//! mutation bumps `revision`, and the sync layer watches that to schedule
//! saves.

use crate::error::GraphError;
use crate::id::NodeId;
use crate::model::{Edge, GraphSnapshot, Node, Point};

/// Authoritative node/edge collections.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    revision: u64,
}

impl GraphStore {
    /// A store seeded with the canonical starting graph.
    pub fn new() -> Self {
        Self::from_snapshot(GraphSnapshot::default_graph())
    }

    pub fn from_snapshot(snapshot: GraphSnapshot) -> Self {
        Self {
            nodes: snapshot.nodes,
            edges: snapshot.edges,
            revision: 0,
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.get_node(id).is_some()
    }

    pub fn has_edge(&self, source: &NodeId, target: &NodeId) -> bool {
        self.edges
            .iter()
            .any(|e| &e.source == source && &e.target == target)
    }

    /// Monotonic mutation counter. Bumped by every successful mutation;
    /// the persistence layer schedules saves off this.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clone the current state as the unit of persistence.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Append a node. Ids must be unique within the store.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.contains_node(&node.id) {
            return Err(GraphError::DuplicateId(node.id));
        }
        self.nodes.push(node);
        self.touch();
        Ok(())
    }

    /// Append an edge. Endpoints are not checked against the node sequence;
    /// call sites guarantee both exist at creation time.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
        self.touch();
    }

    /// Remove the node with this id. `Ok(false)` when absent;
    /// `ForbiddenDeletion` when the id is the root's.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<bool, GraphError> {
        if id.is_root() {
            return Err(GraphError::ForbiddenDeletion);
        }
        let before = self.nodes.len();
        self.nodes.retain(|n| &n.id != id);
        let removed = self.nodes.len() < before;
        if removed {
            self.touch();
        }
        Ok(removed)
    }

    /// Remove every edge satisfying the predicate. Returns the removed count.
    pub fn remove_edges_matching(&mut self, mut predicate: impl FnMut(&Edge) -> bool) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| !predicate(e));
        let removed = before - self.edges.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    /// Move a node to a new position. `false` when the id is unknown.
    pub fn update_position(&mut self, id: &NodeId, position: Point) -> bool {
        match self.nodes.iter_mut().find(|n| &n.id == id) {
            Some(node) => {
                node.position = position;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Swap in an entire snapshot (load and reset paths).
    pub fn replace(&mut self, snapshot: GraphSnapshot) {
        self.nodes = snapshot.nodes;
        self.edges = snapshot.edges;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use pretty_assertions::assert_eq;

    fn node(id: &str) -> Node {
        Node::at(NodeId::from(id), Point::new(0.0, 0.0))
    }

    #[test]
    fn new_store_holds_default_graph() {
        let store = GraphStore::new();
        assert_eq!(store.snapshot(), GraphSnapshot::default_graph());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn add_node_rejects_duplicate_id() {
        let mut store = GraphStore::new();
        store.add_node(node("2")).unwrap();
        let err = store.add_node(node("2")).unwrap_err();
        assert_eq!(err, GraphError::DuplicateId(NodeId::from("2")));
        assert_eq!(store.node_count(), 2);
    }

    #[test]
    fn remove_node_refuses_root() {
        let mut store = GraphStore::new();
        let err = store.remove_node(&NodeId::root()).unwrap_err();
        assert_eq!(err, GraphError::ForbiddenDeletion);
        assert!(store.contains_node(&NodeId::root()));
    }

    #[test]
    fn remove_node_is_noop_for_unknown_id() {
        let mut store = GraphStore::new();
        let before = store.revision();
        assert_eq!(store.remove_node(&NodeId::from("9")), Ok(false));
        assert_eq!(store.revision(), before);
    }

    #[test]
    fn add_edge_does_not_check_endpoints() {
        // Deliberate contract gap: endpoints are the call sites' problem.
        let mut store = GraphStore::new();
        store.add_edge(Edge::between(NodeId::from("8"), NodeId::from("9")));
        assert_eq!(store.edges().len(), 1);
    }

    #[test]
    fn remove_edges_matching_removes_all_hits() {
        let mut store = GraphStore::new();
        store.add_edge(Edge::between(NodeId::root(), NodeId::from("2")));
        store.add_edge(Edge::between(NodeId::root(), NodeId::from("3")));
        store.add_edge(Edge::between(NodeId::from("2"), NodeId::from("3")));
        let removed = store.remove_edges_matching(|e| e.source.is_root());
        assert_eq!(removed, 2);
        assert_eq!(store.edges().len(), 1);
    }

    #[test]
    fn replace_swaps_both_sequences() {
        let mut store = GraphStore::new();
        store.add_node(node("2")).unwrap();
        store.add_edge(Edge::to_new_node(NodeId::root(), NodeId::from("2")));

        store.replace(GraphSnapshot::default_graph());
        assert_eq!(store.snapshot(), GraphSnapshot::default_graph());
    }

    #[test]
    fn every_mutation_bumps_revision() {
        let mut store = GraphStore::new();
        let r0 = store.revision();
        store.add_node(node("2")).unwrap();
        let r1 = store.revision();
        store.add_edge(Edge::to_new_node(NodeId::root(), NodeId::from("2")));
        let r2 = store.revision();
        store.update_position(&NodeId::from("2"), Point::new(5.0, 5.0));
        let r3 = store.revision();
        store.remove_node(&NodeId::from("2")).unwrap();
        let r4 = store.revision();
        assert!(r0 < r1 && r1 < r2 && r2 < r3 && r3 < r4);
    }

    #[test]
    fn update_position_moves_the_node() {
        let mut store = GraphStore::new();
        store.add_node(node("2")).unwrap();
        assert!(store.update_position(&NodeId::from("2"), Point::new(30.0, 40.0)));
        let moved = store.get_node(&NodeId::from("2")).unwrap();
        assert_eq!(moved.position, Point::new(30.0, 40.0));
        assert!(!store.update_position(&NodeId::from("9"), Point::new(0.0, 0.0)));
    }
}
