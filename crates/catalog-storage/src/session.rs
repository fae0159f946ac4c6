//! Session store: the bearer credential and the remembered tag.

use crate::{SecureStorage, StorageKeys, StorageResult};
use std::fmt;
use std::sync::Arc;

/// Handle to the client's persisted session state.
///
/// Cloning is cheap; all clones share one backend. At most one credential
/// exists at a time: [`SessionStore::set_credential`] overwrites and
/// [`SessionStore::clear_credential`] is idempotent.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SecureStorage>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SecureStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by [`crate::MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(crate::MemoryStorage::new()))
    }

    pub fn get_credential(&self) -> StorageResult<Option<String>> {
        Ok(self
            .storage
            .get(StorageKeys::TOKEN)?
            .filter(|token| !token.is_empty()))
    }

    pub fn set_credential(&self, token: &str) -> StorageResult<()> {
        self.storage.set(StorageKeys::TOKEN, token)
    }

    /// Returns whether a credential was present.
    pub fn clear_credential(&self) -> StorageResult<bool> {
        self.storage.delete(StorageKeys::TOKEN)
    }

    pub fn has_credential(&self) -> StorageResult<bool> {
        Ok(self.get_credential()?.is_some())
    }

    pub fn get_last_tag(&self) -> StorageResult<Option<String>> {
        Ok(self
            .storage
            .get(StorageKeys::LAST_TAG)?
            .filter(|tag| !tag.is_empty()))
    }

    pub fn set_last_tag(&self, tag: &str) -> StorageResult<()> {
        self.storage.set(StorageKeys::LAST_TAG, tag)
    }
}
