//! The persistence seam: one trait, several storage flavors behind it.
//!
//! The editor core is written against [`PersistenceBackend`] only — whether
//! snapshots land in a local file or a remote document store is invisible to
//! the store, the handlers, and the sync state machine.

use dg_core::GraphSnapshot;
use thiserror::Error;

/// Errors from backend I/O. Never fatal to a running session: the sync
/// layer logs them and keeps editing against in-memory state.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The backend could not be reached or refused the operation.
    #[error("persistence backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered, but the stored document does not parse.
    #[error("stored snapshot is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<std::io::Error> for PersistError {
    fn from(err: std::io::Error) -> Self {
        PersistError::Unavailable(err.to_string())
    }
}

impl From<reqwest::Error> for PersistError {
    fn from(err: reqwest::Error) -> Self {
        PersistError::Unavailable(err.to_string())
    }
}

/// A key-value snapshot store.
///
/// `load` is idempotent and side-effect-free; `save` is a full-snapshot
/// overwrite with last-write-wins semantics, so saving the same snapshot
/// twice leaves the stored state unchanged.
#[allow(async_fn_in_trait)]
pub trait PersistenceBackend {
    /// Read the stored snapshot, `None` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<GraphSnapshot>, PersistError>;

    /// Overwrite the stored snapshot.
    async fn save(&self, snapshot: &GraphSnapshot) -> Result<(), PersistError>;
}
