use std::sync::RwLock;

use super::error::StorageResult;
use super::ids::SessionId;
use super::SessionIdentityStore;

/// Process-lifetime store used by tests and as the fail-soft fallback when
/// durable storage is unavailable. Losing persistence degrades gracefully
/// to "new session each visit".
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    session_id: RwLock<Option<SessionId>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionIdentityStore for MemoryIdentityStore {
    fn load(&self) -> StorageResult<Option<SessionId>> {
        Ok(*self.session_id.read().unwrap_or_else(|poisoned| {
            poisoned.into_inner()
        }))
    }

    fn save(&self, session_id: SessionId) -> StorageResult<()> {
        *self
            .session_id
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(session_id);
        Ok(())
    }
}
