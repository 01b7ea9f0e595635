/// Chat speaker role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The site visitor typing into the panel.
    Guest,
    /// The remote concierge service (and the fixed greeting/apology copy).
    Concierge,
}

/// Core immutable message model. Once appended to the transcript a message
/// is never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn guest(text: impl Into<String>) -> Self {
        Self::new(Role::Guest, text)
    }

    pub fn concierge(text: impl Into<String>) -> Self {
        Self::new(Role::Concierge, text)
    }
}
