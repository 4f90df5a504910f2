mod backend;
mod session_mirror;

use crate::{
    DurableStorage, Latency, MemoryStorage, MockBackend, SessionMirror, SessionStore,
    StorageError, StorageResult,
};

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Storage over [`MemoryStorage`] whose writes can be switched to fail.
#[derive(Default)]
pub(crate) struct FlakyStorage {
    inner: MemoryStorage,
    fail_writes: AtomicBool,
}

impl FlakyStorage {
    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check(&self, key: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::file_write(
                PathBuf::from(format!("{key}.json")),
                io::Error::other("disk full"),
            ));
        }
        Ok(())
    }
}

impl DurableStorage for FlakyStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check(key)?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.check(key)?;
        self.inner.remove(key)
    }
}

pub(crate) fn store_over(storage: Arc<dyn DurableStorage>) -> SessionStore {
    let mirror = SessionMirror::new(storage);
    let backend = Arc::new(MockBackend::new(Latency::none()));
    SessionStore::hydrate(mirror, backend).unwrap()
}

pub(crate) fn memory_store() -> (Arc<MemoryStorage>, SessionStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_over(storage.clone());
    (storage, store)
}
