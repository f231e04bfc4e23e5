//! Debounced load/save protocol between the graph store and a backend.
//!
//! An explicit state machine: `Loading → Ready` happens exactly once at
//! mount, and an idle/saving cycle runs orthogonally off store mutations.
//! Mutations that arrive while still `Loading` arm nothing — the debounce
//! only exists once the initial load has resolved, so a slow load can never
//! be overwritten by an accidental save of the pre-load default graph.
//!
//! Time is passed in explicitly (`Instant`), which keeps the machine
//! deterministic under test; [`PersistenceSync::idle_flush`] drives the
//! deadline against the tokio clock for real applications.

use crate::backend::PersistenceBackend;
use dg_core::{GraphSnapshot, GraphStore, IdAllocator};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
}

/// Keeps a [`GraphStore`] synchronized with a [`PersistenceBackend`].
#[derive(Debug)]
pub struct PersistenceSync<B> {
    backend: B,
    state: LoadState,
    debounce: Duration,
    deadline: Option<Instant>,
    saving: bool,
}

impl<B: PersistenceBackend> PersistenceSync<B> {
    pub fn new(backend: B, debounce: Duration) -> Self {
        Self {
            backend,
            state: LoadState::Loading,
            debounce,
            deadline: None,
            saving: false,
        }
    }

    // ─── Loading → Ready ─────────────────────────────────────────────────

    /// Load the stored snapshot and seed the store and allocator from it.
    ///
    /// A snapshot with at least one node replaces the store's contents and
    /// reseeds the allocator from the node count. An empty or absent result
    /// seeds the canonical default graph. A backend failure is logged and
    /// the store keeps its pre-load default — not retried. The machine is
    /// `Ready` afterwards in every case.
    pub async fn mount(&mut self, store: &mut GraphStore, ids: &mut IdAllocator) {
        match self.backend.load().await {
            Ok(Some(snapshot)) if !snapshot.nodes.is_empty() => {
                let count = snapshot.nodes.len() as u64;
                store.replace(snapshot);
                ids.reseed(count);
                log::debug!("loaded snapshot with {count} nodes");
            }
            Ok(_) => {
                store.replace(GraphSnapshot::default_graph());
                log::debug!("no stored snapshot, seeded default graph");
            }
            Err(err) => {
                log::warn!("load failed, editing against in-memory default: {err}");
            }
        }
        self.state = LoadState::Ready;
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    // ─── Idle ⇄ Saving ───────────────────────────────────────────────────

    /// Record that the store mutated. (Re)arms the single debounce deadline;
    /// at most one pending save exists at a time. Ignored while `Loading`.
    pub fn note_mutation(&mut self, now: Instant) {
        if self.is_loading() {
            log::debug!("mutation before load resolved; no save armed");
            return;
        }
        self.deadline = Some(now + self.debounce);
    }

    /// The instant the pending save falls due, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// `true` while a `save` call is outstanding (the UI's saving indicator).
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Fire the pending save if its deadline has elapsed. Returns whether a
    /// save was attempted. A failed save is logged and dropped; the next
    /// mutation re-arms the debounce and retries opportunistically.
    pub async fn flush_due(&mut self, store: &GraphStore, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {}
            _ => return false,
        }
        self.deadline = None;
        self.save(store).await;
        true
    }

    /// Write through immediately, bypassing and clearing any pending
    /// debounce. The reset path uses this so the backend reflects the reset
    /// even if a debounced save was about to fire.
    pub async fn save_now(&mut self, store: &GraphStore) {
        self.deadline = None;
        self.save(store).await;
    }

    /// Sleep until the pending deadline on the tokio clock, then flush.
    /// Returns `false` immediately when nothing is armed.
    pub async fn idle_flush(&mut self, store: &GraphStore) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        tokio::time::sleep_until(deadline.into()).await;
        self.flush_due(store, Instant::now()).await
    }

    async fn save(&mut self, store: &GraphStore) {
        self.saving = true;
        let snapshot = store.snapshot();
        match self.backend.save(&snapshot).await {
            Ok(()) => log::debug!(
                "saved snapshot: {} nodes, {} edges",
                snapshot.nodes.len(),
                snapshot.edges.len()
            ),
            Err(err) => log::warn!("save failed, will retry on next mutation: {err}"),
        }
        self.saving = false;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
