//! Durable token storage port.

use thiserror::Error;

/// Failure of the durable token store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("token storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for persisting the session token across process restarts.
///
/// The store holds at most one token under a single well-known key:
/// presence means "possibly authenticated", absence means "definitely not".
/// `clear` on an already-empty store must succeed, so clearing is
/// idempotent.
pub trait TokenStorage: Send + Sync {
    /// Reads the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persists the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store cannot be written.
    fn store(&self, token: &str) -> Result<(), StorageError>;

    /// Removes the persisted token. A no-op when none is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the removal fails for a reason other
    /// than the token being absent.
    fn clear(&self) -> Result<(), StorageError>;
}
