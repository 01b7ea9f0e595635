use atrium_storage::{SessionId, SessionIdentityStore};

/// Returns the visitor's durable session identifier.
///
/// Storage failures degrade to a fresh identifier scoped to the current
/// page load: the visitor starts a new backend conversation each visit
/// instead of the widget refusing to mount.
pub fn acquire_session_id(store: &dyn SessionIdentityStore) -> SessionId {
    match store.get_or_create() {
        Ok(session_id) => session_id,
        Err(error) => {
            tracing::warn!(
                "session storage unavailable, falling back to a page-lifetime identifier: {}",
                error
            );
            SessionId::generate()
        }
    }
}

#[cfg(test)]
mod tests {
    use atrium_storage::{FileIdentityStore, MemoryIdentityStore, SessionIdentityStore};

    use super::*;

    #[test]
    fn repeated_acquisition_returns_the_same_identifier() {
        let store = MemoryIdentityStore::new();
        let first = acquire_session_id(&store);
        let second = acquire_session_id(&store);
        assert_eq!(first, second);
    }

    #[test]
    fn unwritable_storage_falls_back_to_a_fresh_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "occupied by a plain file").unwrap();

        // Parent "directory" is a file, so every save fails.
        let store = FileIdentityStore::new(blocker.join("session"));
        assert!(store.get_or_create().is_err());

        let first = acquire_session_id(&store);
        let second = acquire_session_id(&store);
        assert_ne!(first, second);
    }
}
