pub mod error;
pub mod file;
pub mod ids;
pub mod memory;

pub use error::{StorageError, StorageResult};
pub use file::FileIdentityStore;
pub use ids::SessionId;
pub use memory::MemoryIdentityStore;

/// Fixed namespace key under which the visitor's session identifier is
/// persisted. One key-value pair is the whole durable state of the widget.
pub const SESSION_STORAGE_KEY: &str = "sheerssoft_session_id";

/// Durable home of the per-visitor session identifier.
///
/// The identifier is created once per storage scope and never mutated
/// afterwards; it lives until the scope is cleared externally.
pub trait SessionIdentityStore: Send + Sync {
    /// Returns the previously persisted identifier, or `None` when the
    /// scope has never seen one (or the stored value is unusable).
    fn load(&self) -> StorageResult<Option<SessionId>>;

    /// Persists the identifier under the fixed namespace key.
    fn save(&self, session_id: SessionId) -> StorageResult<()>;

    /// Returns the stored identifier, minting and persisting a fresh one
    /// on first use. Idempotent within one storage scope.
    fn get_or_create(&self) -> StorageResult<SessionId> {
        if let Some(existing) = self.load()? {
            return Ok(existing);
        }

        let fresh = SessionId::generate();
        self.save(fresh)?;
        Ok(fresh)
    }
}
