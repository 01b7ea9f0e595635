/// Backend trait seam and error taxonomy.
pub mod backend;
/// Reqwest-based conversation endpoint implementation.
pub mod http;
/// Wire contract types for the conversation endpoint.
pub mod wire;

pub use backend::{ClientError, ClientResult, ConversationBackend};
pub use http::{CONVERSATIONS_PATH, HttpBackend};
pub use wire::{ConversationReply, ConversationRequest};
