use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use cmdbook_types::{Command, CommandDraft, CommandId};

use crate::error::{StoreError, StoreResult};
use crate::state::CatalogState;
use crate::traits::CommandStore;

/// On-disk shape of the catalog. One JSON document per store file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CatalogDocument {
    next_id: u64,
    commands: Vec<Command>,
}

/// File-backed command store.
///
/// State lives in memory exactly like [`crate::InMemoryCommandStore`];
/// `commit` snapshots it to a single JSON file. The snapshot is written to a
/// temp file in the same directory and renamed into place, so a crash during
/// commit leaves the previous snapshot intact. Changes made after the last
/// `commit` are lost on reopen.
pub struct FileCommandStore {
    path: PathBuf,
    inner: RwLock<CatalogState>,
}

impl FileCommandStore {
    /// Open the catalog at `path`, loading the last committed snapshot.
    /// A missing file yields an empty catalog; the file is first created by
    /// `commit`.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(text) => {
                let doc: CatalogDocument = serde_json::from_str(&text)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                state_from_document(doc)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CatalogState::default(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        tracing::debug!(
            path = %path.display(),
            records = state.records.len(),
            "opened command catalog"
        );

        Ok(Self {
            path,
            inner: RwLock::new(state),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").records.is_empty()
    }

    fn write_document(&self, doc: &CatalogDocument) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        let text = serde_json::to_string_pretty(doc)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        tmp.write_all(text.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

fn state_from_document(doc: CatalogDocument) -> CatalogState {
    let records: BTreeMap<CommandId, Command> =
        doc.commands.into_iter().map(|c| (c.id, c)).collect();
    // Never hand out an id at or below one already present, even if the
    // stored cursor lags behind the records. A record at the end of the id
    // range saturates the cursor; the catalog stays readable and `add`
    // refuses instead of wrapping.
    let floor = records
        .keys()
        .next_back()
        .map(|id| id.as_u64().saturating_add(1))
        .unwrap_or(1);
    let next_id = doc.next_id.max(floor).max(1);
    CatalogState { records, next_id }
}

impl CommandStore for FileCommandStore {
    fn add(&self, draft: &CommandDraft) -> StoreResult<CommandId> {
        let mut state = self.inner.write().expect("lock poisoned");
        state.add(draft).ok_or(StoreError::IdSpaceExhausted)
    }

    fn find(&self, id: CommandId) -> StoreResult<Option<Command>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.records.get(&id).cloned())
    }

    fn replace(&self, id: CommandId, draft: &CommandDraft) -> StoreResult<bool> {
        let mut state = self.inner.write().expect("lock poisoned");
        Ok(state.replace(id, draft))
    }

    fn remove(&self, id: CommandId) -> StoreResult<Option<Command>> {
        let mut state = self.inner.write().expect("lock poisoned");
        Ok(state.records.remove(&id))
    }

    fn list(&self) -> StoreResult<Vec<Command>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.records.values().cloned().collect())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.len())
    }

    fn commit(&self) -> StoreResult<()> {
        // Snapshot and write under the read lock so the file always reflects
        // a consistent state; mutations wait until the snapshot is on disk.
        let state = self.inner.read().expect("lock poisoned");
        let doc = CatalogDocument {
            next_id: state.next_id,
            commands: state.records.values().cloned().collect(),
        };
        self.write_document(&doc)?;

        tracing::debug!(
            path = %self.path.display(),
            records = doc.commands.len(),
            "committed command catalog"
        );
        Ok(())
    }
}

impl std::fmt::Debug for FileCommandStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCommandStore")
            .field("path", &self.path)
            .field("record_count", &self.len())
            .finish()
    }
}
