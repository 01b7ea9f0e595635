use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/conversations`.
///
/// The session identifier travels as an opaque string; the backend owns
/// any interpretation beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationRequest {
    pub property_id: String,
    pub message: String,
    pub session_id: String,
}

impl ConversationRequest {
    pub fn new(
        property_id: impl Into<String>,
        message: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            message: message.into(),
            session_id: session_id.into(),
        }
    }
}

/// Success body from the conversation endpoint. The `response` field is
/// rendered verbatim as the concierge reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversationReply {
    pub response: String,
}
