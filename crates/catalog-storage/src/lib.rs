//! Persistent client storage for the catalog session.
//!
//! Backends implement [`SecureStorage`]:
//! - [`FileStorage`]: one JSON file under the client's data directory
//! - [`MemoryStorage`]: in-process only
//!
//! [`SessionStore`] is the typed view the request gateway works with.

mod file;
mod keys;
mod memory;
mod session;
mod traits;

pub use file::FileStorage;
pub use keys::StorageKeys;
pub use memory::MemoryStorage;
pub use session::SessionStore;
pub use traits::SecureStorage;

use catalog_config::Paths;
use std::sync::Arc;
use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Create the default storage backend at `paths.session_file()`.
pub fn create_storage(paths: &Paths) -> StorageResult<Arc<dyn SecureStorage>> {
    let storage = FileStorage::open(paths.session_file())?;
    Ok(Arc::new(storage))
}

/// Create a [`SessionStore`] over the default backend.
pub fn create_session_store(paths: &Paths) -> StorageResult<SessionStore> {
    Ok(SessionStore::new(create_storage(paths)?))
}
