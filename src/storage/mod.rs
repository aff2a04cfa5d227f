//! Durable key-value storage for the persisted session.
//!
//! The session layout uses three fixed keys (`token`, `user`, `studentNumber`).
//! Implementations must tolerate removing a key that is not present, and reads
//! must reflect the latest write even when it came from another handle.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode storage contents: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns an error if the value cannot be written durably.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    /// Returns an error if the key cannot be removed durably. Missing keys are not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
