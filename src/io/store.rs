use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::model::list::TaskList;
use crate::model::registry::DEFAULT_LIST;
use crate::model::task::TaskMap;

/// File name of the backing store inside the data directory.
pub const STORE_FILE: &str = "tasks.json";

/// Store document version this build reads and writes.
pub const STORE_VERSION: u32 = 1;

/// Error type for store I/O operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("store file {path} is not well-formed: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("store file {path} has unsupported version {found}")]
    UnsupportedVersion { path: PathBuf, found: u32 },
    #[error("could not serialize store: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// On-disk formats
// ---------------------------------------------------------------------------

/// Current on-disk document: a version tag plus every list's task tree.
#[derive(Debug, Deserialize)]
struct StoreDocument {
    version: u32,
    lists: IndexMap<String, TaskList>,
}

/// Serialization twin of `StoreDocument` that borrows the lists.
#[derive(Serialize)]
struct StoreDocumentOut<'a> {
    version: u32,
    lists: &'a IndexMap<String, TaskList>,
}

/// The two accepted layouts: the versioned envelope, or the bare
/// text-to-node map written by this tool's predecessor.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoreFile {
    Versioned(StoreDocument),
    Legacy(TaskMap),
}

/// Path of the backing store inside a data directory.
pub fn store_path(dir: &Path) -> PathBuf {
    dir.join(STORE_FILE)
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

/// Load every list from the backing store.
///
/// A missing file is the first-run case and yields no lists; the caller
/// bootstraps the Default list. A legacy bare task map is accepted and
/// loaded as the Default list. Anything else unparseable is reported as
/// corrupt, never silently discarded.
pub fn load_store(dir: &Path) -> Result<IndexMap<String, TaskList>, StoreError> {
    let path = store_path(dir);
    if !path.exists() {
        return Ok(IndexMap::new());
    }
    let content = fs::read_to_string(&path).map_err(|e| StoreError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let parsed: StoreFile = serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
        path: path.clone(),
        source: e,
    })?;

    match parsed {
        StoreFile::Versioned(doc) => {
            if doc.version != STORE_VERSION {
                return Err(StoreError::UnsupportedVersion {
                    path,
                    found: doc.version,
                });
            }
            Ok(doc.lists)
        }
        StoreFile::Legacy(tasks) => {
            let mut lists = IndexMap::new();
            lists.insert(DEFAULT_LIST.to_string(), TaskList { tasks });
            Ok(lists)
        }
    }
}

/// Save every list to the backing store.
///
/// The document is written whole through a temp file + rename, so a
/// partial write is never observable by a later load.
pub fn save_store(dir: &Path, lists: &IndexMap<String, TaskList>) -> Result<(), StoreError> {
    let doc = StoreDocumentOut {
        version: STORE_VERSION,
        lists,
    };
    let mut content = serde_json::to_string_pretty(&doc)?;
    content.push('\n');
    atomic_write(&store_path(dir), content.as_bytes())?;
    Ok(())
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Corrupt store backup
// ---------------------------------------------------------------------------

/// Move the store file aside, returning the backup path.
///
/// Used by the explicit reset flow so an unreadable store is preserved
/// for inspection instead of overwritten. Returns Ok(None) when there is
/// no store file to move.
pub fn backup_store(dir: &Path) -> Result<Option<PathBuf>, StoreError> {
    let path = store_path(dir);
    if !path.exists() {
        return Ok(None);
    }
    let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    let backup = dir.join(format!("{}.bak-{}", STORE_FILE, stamp));
    fs::rename(&path, &backup)?;
    Ok(Some(backup))
}
