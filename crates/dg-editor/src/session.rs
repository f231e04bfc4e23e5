//! The editor session: graph store + id allocator + persistence sync, with
//! the gesture-level operations wired through them.
//!
//! All mutations happen on the caller's event loop in response to discrete
//! gestures; nothing here locks or spawns. Gesture methods take the current
//! `Instant` so the debounce machinery stays deterministic under test.

use crate::events::{ConnectionDrop, Projection};
use dg_core::{Edge, GraphError, GraphSnapshot, GraphStore, IdAllocator, Node, NodeId, Point};
use dg_persist::{PersistenceBackend, PersistenceSync};
use std::time::{Duration, Instant};

/// One interactive editing session against a persistence backend.
pub struct EditorSession<B> {
    store: GraphStore,
    ids: IdAllocator,
    sync: PersistenceSync<B>,
}

impl<B: PersistenceBackend> EditorSession<B> {
    /// A session holding the pre-load default graph. Call [`mount`]
    /// (once) to seed it from the backend.
    ///
    /// [`mount`]: EditorSession::mount
    pub fn new(backend: B, debounce: Duration) -> Self {
        Self {
            store: GraphStore::new(),
            ids: IdAllocator::new(),
            sync: PersistenceSync::new(backend, debounce),
        }
    }

    /// Load the stored snapshot and seed the store and allocator.
    pub async fn mount(&mut self) {
        self.sync.mount(&mut self.store, &mut self.ids).await;
    }

    // ─── Gestures ────────────────────────────────────────────────────────

    /// Connection-end handler. A release on a valid target is the rendering
    /// collaborator's business; a release into empty space materializes a
    /// new node at the translated drop position plus the edge from the
    /// drag's origin. Returns the new node's id when one was created.
    pub fn connection_drop(
        &mut self,
        drop: &ConnectionDrop,
        projection: &impl Projection,
        now: Instant,
    ) -> Option<NodeId> {
        if drop.is_valid {
            return None;
        }
        let position = projection.screen_to_graph(drop.screen);
        let id = self.ids.next();
        if let Err(err) = self.store.add_node(Node::at(id.clone(), position)) {
            // Reachable only through the allocator's decrement-on-release
            // hazard. Absorb, give the id back, leave the graph untouched.
            log::warn!("connection drop dropped: {err}");
            self.ids.release(&id);
            return None;
        }
        self.store
            .add_edge(Edge::to_new_node(drop.from_node.clone(), id.clone()));
        self.sync.note_mutation(now);
        Some(id)
    }

    /// Connect two existing nodes (the collaborator's valid-drop path
    /// forwarded to the store). Skips an identical existing connection.
    pub fn connect(&mut self, source: &NodeId, target: &NodeId, now: Instant) -> bool {
        if self.store.has_edge(source, target) {
            return false;
        }
        self.store
            .add_edge(Edge::between(source.clone(), target.clone()));
        self.sync.note_mutation(now);
        true
    }

    /// Apply a drag's final position to a node.
    pub fn move_node(&mut self, id: &NodeId, position: Point, now: Instant) -> bool {
        if self.store.update_position(id, position) {
            self.sync.note_mutation(now);
            true
        } else {
            false
        }
    }

    /// Deletion cascade. Removes the node, sweeps edges whose endpoints
    /// BOTH equal the deleted id (only self-loops ever match — edges that
    /// touch the node on one side are left dangling; see the pinning test
    /// in `tests/deletion.rs`), then releases the id. The root node always
    /// fails with `ForbiddenDeletion`. `Ok(false)` when the id is unknown;
    /// the cascade and release run only when a node actually went away.
    pub fn delete_node(&mut self, id: &NodeId, now: Instant) -> Result<bool, GraphError> {
        let removed = self.store.remove_node(id)?;
        if !removed {
            return Ok(false);
        }
        self.store
            .remove_edges_matching(|e| &e.source == id && &e.target == id);
        self.ids.release(id);
        self.sync.note_mutation(now);
        Ok(true)
    }

    /// Back to the canonical starting graph, locally and in the backend.
    /// The backend write goes through directly, not via the debounce, so it
    /// reflects the reset immediately.
    pub async fn reset(&mut self) {
        self.store.replace(GraphSnapshot::default_graph());
        self.ids.reset();
        self.sync.save_now(&self.store).await;
    }

    // ─── Persistence driving ─────────────────────────────────────────────

    /// Fire the pending debounced save if it is due.
    pub async fn flush_due(&mut self, now: Instant) -> bool {
        self.sync.flush_due(&self.store, now).await
    }

    /// Sleep until the pending save falls due on the tokio clock, then fire.
    pub async fn idle_flush(&mut self) -> bool {
        self.sync.idle_flush(&self.store).await
    }

    // ─── State exposed to the rendering collaborator ─────────────────────

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        self.store.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.sync.is_loading()
    }

    pub fn is_saving(&self) -> bool {
        self.sync.is_saving()
    }

    pub fn backend(&self) -> &B {
        self.sync.backend()
    }
}
