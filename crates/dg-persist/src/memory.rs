//! In-process backend for tests: stores the snapshot in a mutex and counts
//! load/save calls so scenarios can assert on coalescing and idempotence.

use crate::backend::{PersistError, PersistenceBackend};
use dg_core::GraphSnapshot;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    stored: Option<GraphSnapshot>,
    loads: u32,
    saves: u32,
    fail_loads: bool,
    fail_saves: bool,
}

/// Test-support backend. `save` takes `&self` on the trait, so the state
/// sits behind a mutex.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    inner: Mutex<Inner>,
}

impl MemoryBackend {
    /// Empty backend: `load` answers "nothing stored".
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a stored snapshot.
    pub fn with_snapshot(snapshot: GraphSnapshot) -> Self {
        let backend = Self::new();
        backend.inner.lock().unwrap().stored = Some(snapshot);
        backend
    }

    /// Make every `load` fail with `Unavailable`.
    pub fn failing_loads(self) -> Self {
        self.inner.lock().unwrap().fail_loads = true;
        self
    }

    /// Make every `save` fail with `Unavailable`.
    pub fn failing_saves(self) -> Self {
        self.inner.lock().unwrap().fail_saves = true;
        self
    }

    pub fn stored(&self) -> Option<GraphSnapshot> {
        self.inner.lock().unwrap().stored.clone()
    }

    pub fn load_count(&self) -> u32 {
        self.inner.lock().unwrap().loads
    }

    pub fn save_count(&self) -> u32 {
        self.inner.lock().unwrap().saves
    }
}

impl PersistenceBackend for MemoryBackend {
    async fn load(&self) -> Result<Option<GraphSnapshot>, PersistError> {
        let mut inner = self.inner.lock().unwrap();
        inner.loads += 1;
        if inner.fail_loads {
            return Err(PersistError::Unavailable("memory backend down".into()));
        }
        Ok(inner.stored.clone())
    }

    async fn save(&self, snapshot: &GraphSnapshot) -> Result<(), PersistError> {
        let mut inner = self.inner.lock().unwrap();
        inner.saves += 1;
        if inner.fail_saves {
            return Err(PersistError::Unavailable("memory backend down".into()));
        }
        inner.stored = Some(snapshot.clone());
        Ok(())
    }
}
