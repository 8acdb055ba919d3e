//! Key-value storage the content store persists into.
//!
//! A backend holds opaque string blobs under string keys, like browser
//! local storage. Every write replaces the whole value for its key.

pub mod file;
pub mod memory;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage key cannot be empty")]
    EmptyKey,
    #[error("invalid storage key {0:?}: use ASCII letters, digits, '.', '-', '_'; no leading '.'")]
    InvalidKey(String),
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A synchronous string key-value store.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value under `key`, or `None` if nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Check that a key is usable by every backend, including as a file name.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::EmptyKey);
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_');
    if key.starts_with('.') || !key.chars().all(allowed) {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
