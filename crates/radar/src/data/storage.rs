//! File-backed storage for session state
//!
//! Directory structure:
//! ~/.radar/
//!   state.json           # Current session (scenario, inputs, ledgers, currency)
//!   radar.log            # Rotated log file
//!
//! The store is reached through the [`StoragePort`] trait so the session
//! layer can be exercised against an in-memory substitute in tests; the
//! production implementation is [`FileStorage`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::export::{ExportDocument, ImportError};
use crate::util::io::atomic_write;

/// Key under which the session state document is stored
pub const STATE_KEY: &str = "state";

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<ImportError> for StorageError {
    fn from(err: ImportError) -> Self {
        StorageError::Parse(err.to_string())
    }
}

/// Key-value persistence boundary.
///
/// Values are opaque strings; callers decide the encoding. Reading an
/// absent key is `Ok(None)`, not an error.
pub trait StoragePort {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage rooted at a data directory, one JSON file per key
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.radar/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".radar")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_filename(key)))
    }

    fn ensure_root(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Get the root path of the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StoragePort for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_root()?;
        let path = self.key_path(key);
        atomic_write(&path, value)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

/// Convenience wrapper binding a storage port to the state document
pub struct DataDirectory<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> DataDirectory<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the stored session document, if any.
    ///
    /// A document that fails to parse is reported, not silently replaced.
    pub fn load_state(&self) -> Result<Option<ExportDocument>, StorageError> {
        match self.storage.read(STATE_KEY)? {
            Some(text) => {
                let doc = ExportDocument::from_json(&text)?;
                Ok(Some(doc))
            }
            None => Ok(None),
        }
    }

    /// Persist the session document
    pub fn save_state(&self, document: &ExportDocument) -> Result<(), StorageError> {
        let json = document
            .to_json()
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize state: {}", e)))?;
        self.storage.write(STATE_KEY, &json)
    }

    /// Drop the stored session, returning to defaults on next load
    pub fn clear_state(&self) -> Result<(), StorageError> {
        self.storage.remove(STATE_KEY)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Sanitize a filename to be safe for the filesystem
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
