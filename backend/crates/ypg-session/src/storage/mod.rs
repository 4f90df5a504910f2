pub mod error;
pub mod file_storage;
pub mod memory_storage;

pub use error::{Result as StorageResult, StorageError};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Durable key/value storage holding string values.
///
/// Absence of a key is not an error: `get` returns `Ok(None)` and `remove`
/// succeeds.
pub trait DurableStorage: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Keys become file names, so only a conservative alphabet is accepted.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::invalid_key(key, "key cannot be empty"));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(StorageError::invalid_key(
            key,
            "only ASCII letters, digits, '-' and '_' are allowed",
        ));
    }

    Ok(())
}
