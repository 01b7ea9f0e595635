use std::fmt;
use std::str::FromStr;

use snafu::ResultExt;
use uuid::Uuid;

use super::error::{InvalidSessionIdSnafu, StorageError, StorageResult};

/// Durable, visitor-scoped opaque identifier that correlates every message
/// from one installation into one backend-side conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new(raw: Uuid) -> Self {
        Self(raw)
    }

    /// Mints a fresh cryptographically random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> StorageResult<Self> {
        let parsed = Uuid::parse_str(raw).context(InvalidSessionIdSnafu {
            stage: "parse-session-id",
            raw: raw.to_string(),
        })?;
        Ok(Self(parsed))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<Uuid> for SessionId {
    fn from(value: Uuid) -> Self {
        Self::new(value)
    }
}

impl From<SessionId> for Uuid {
    fn from(value: SessionId) -> Self {
        value.0
    }
}

impl FromStr for SessionId {
    type Err = StorageError;

    fn from_str(raw: &str) -> StorageResult<Self> {
        Self::parse(raw)
    }
}
