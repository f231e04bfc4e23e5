//! Drive an editor session against a file backend from the command line:
//! mount, drop a few connections off the root node, let the debounced save
//! fire, and print the resulting snapshot.
//!
//! Usage: `cargo run -p dg-editor --example drop_session [graph.json]`

use dg_core::NodeId;
use dg_editor::{ConnectionDrop, EditorSession, PanZoom, ScreenPoint};
use dg_persist::FileBackend;
use std::time::{Duration, Instant};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "drop-graph.json".to_string());
    let mut session = EditorSession::new(FileBackend::new(&path), Duration::from_secs(1));
    session.mount().await;
    println!("mounted {} nodes from {path}", session.store().node_count());

    let view = PanZoom::default();
    for (x, y) in [(150.0, 0.0), (150.0, 100.0), (300.0, 50.0)] {
        let drop = ConnectionDrop {
            is_valid: false,
            from_node: NodeId::root(),
            screen: ScreenPoint::new(x, y),
        };
        if let Some(id) = session.connection_drop(&drop, &view, Instant::now()) {
            println!("dropped new node {id} at ({x}, {y})");
        }
    }

    if session.idle_flush().await {
        println!("saved to {path}");
    }
    println!("{:#?}", session.snapshot());
}
