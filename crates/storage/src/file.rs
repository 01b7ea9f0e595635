use std::path::{Path, PathBuf};

use snafu::ResultExt;

use super::error::{
    CreateStateDirectorySnafu, ReadSessionFileSnafu, ReplaceSessionFileSnafu, StorageResult,
    WriteSessionFileSnafu,
};
use super::ids::SessionId;
use super::{SESSION_STORAGE_KEY, SessionIdentityStore};

/// Directory name for widget state under the platform data directory.
pub const STATE_DIRECTORY_NAME: &str = "atrium";

/// File-backed identity store: one small file holding the session
/// identifier, named after the fixed namespace key.
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    /// Returns the default state directory, falling back to a relative
    /// dot-directory when the platform has no data directory.
    pub fn default_state_dir() -> PathBuf {
        dirs::data_dir()
            .map(|path| path.join(STATE_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(".atrium"))
    }

    pub fn default_session_path() -> PathBuf {
        Self::default_state_dir().join(SESSION_STORAGE_KEY)
    }

    /// Creates a store persisting to the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a store at the default per-user location.
    pub fn open_default() -> Self {
        Self::new(Self::default_session_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionIdentityStore for FileIdentityStore {
    fn load(&self) -> StorageResult<Option<SessionId>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path).context(ReadSessionFileSnafu {
            stage: "read-session-file",
            path: self.path.clone(),
        })?;

        match SessionId::parse(raw.trim()) {
            Ok(session_id) => Ok(Some(session_id)),
            Err(error) => {
                // An unreadable identifier is treated as absent so the
                // caller can mint a replacement instead of failing hard.
                tracing::warn!(
                    "discarding unparseable session file at {:?}: {}",
                    self.path,
                    error
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session_id: SessionId) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context(CreateStateDirectorySnafu {
                stage: "create-state-directory",
                path: parent.to_path_buf(),
            })?;
        }

        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, format!("{session_id}\n")).context(WriteSessionFileSnafu {
            stage: "write-temporary-session-file",
            path: temp_path.clone(),
        })?;

        std::fs::rename(&temp_path, &self.path).context(ReplaceSessionFileSnafu {
            stage: "rename-temporary-session-file",
            from: temp_path,
            to: self.path.clone(),
        })?;

        tracing::debug!("saved session identifier to {:?}", self.path);
        Ok(())
    }
}
