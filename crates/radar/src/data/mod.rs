//! Persistence layer: the durable export document and file-backed storage

mod export;
mod storage;

pub use export::{EXPORT_VERSION, ExportDocument, ImportError};
pub use storage::{DataDirectory, FileStorage, STATE_KEY, StorageError, StoragePort};
