pub mod error;
pub mod id;
pub mod model;
pub mod store;

pub use error::GraphError;
pub use id::{IdAllocator, NodeId};
pub use model::{Edge, EdgeId, GraphSnapshot, Node, Point};
pub use store::GraphStore;
