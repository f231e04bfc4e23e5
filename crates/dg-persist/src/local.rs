//! Local durable storage: one JSON file holding the whole snapshot.

use crate::backend::{PersistError, PersistenceBackend};
use dg_core::GraphSnapshot;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed persistence. The file holds the snapshot as plain JSON
/// (`{"nodes":[...],"edges":[...]}`); a missing file means "nothing stored".
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceBackend for FileBackend {
    async fn load(&self) -> Result<Option<GraphSnapshot>, PersistError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot = serde_json::from_slice(&bytes)?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &GraphSnapshot) -> Result<(), PersistError> {
        let json = serde_json::to_vec_pretty(snapshot)?;
        // Write-then-rename so a crash mid-save never truncates the stored
        // snapshot.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
