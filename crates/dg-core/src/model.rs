//! Graph data model: nodes, edges, and the snapshot that persists them.
//!
//! A snapshot is the full `{nodes, edges}` state at a point in time — the
//! unit of persistence. Sequences are ordered (insertion order is what the
//! backend stores and what the rendering collaborator draws).

use crate::id::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D position in graph (not screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A positioned, labeled vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
    pub label: String,
}

impl Node {
    /// A node synthesized from a connection drop: labeled after its id.
    pub fn at(id: NodeId, position: Point) -> Self {
        let label = format!("Node {id}");
        Self {
            id,
            position,
            label,
        }
    }

    /// The permanent starting node.
    pub fn root() -> Self {
        Self {
            id: NodeId::root(),
            position: Point::new(0.0, 50.0),
            label: "Node".to_string(),
        }
    }
}

/// The id of an edge.
///
/// Two schemes exist: a drop-synthesized edge takes its target node's id
/// verbatim, and a plain connection between two existing nodes takes the
/// composite `e{source}-{target}` form. Uniqueness across the two schemes is
/// an artifact of how edges are created, not something the store enforces.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// Id for a drop-synthesized edge: equal to the new target node's id.
    pub fn from_target(target: &NodeId) -> Self {
        EdgeId(target.as_str().to_string())
    }

    /// Id for a plain connection between two existing nodes.
    pub fn between(source: &NodeId, target: &NodeId) -> Self {
        EdgeId(format!("e{source}-{target}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(s: &str) -> Self {
        EdgeId(s.to_string())
    }
}

/// A directed connection between two node ids.
///
/// Endpoints are ids, not references: an edge can outlive one of its nodes
/// (see the deletion cascade notes in `dg-editor`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    /// The edge created alongside a drop-synthesized node.
    pub fn to_new_node(source: NodeId, target: NodeId) -> Self {
        Self {
            id: EdgeId::from_target(&target),
            source,
            target,
        }
    }

    /// A plain connection between two existing nodes.
    pub fn between(source: NodeId, target: NodeId) -> Self {
        Self {
            id: EdgeId::between(&source, &target),
            source,
            target,
        }
    }
}

/// The full graph state at a point in time — the unit of persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// The canonical starting graph: the root node, no edges.
    pub fn default_graph() -> Self {
        Self {
            nodes: vec![Node::root()],
            edges: Vec::new(),
        }
    }
}
