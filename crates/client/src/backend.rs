use futures::future::BoxFuture;
use snafu::Snafu;

use crate::wire::{ConversationReply, ConversationRequest};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ClientError {
    #[snafu(display("conversation endpoint '{raw}' is invalid: {details}"))]
    InvalidEndpoint {
        stage: &'static str,
        raw: String,
        details: String,
    },
    #[snafu(display("failed to reach conversation endpoint on `{stage}`: {source}"))]
    RequestSend {
        stage: &'static str,
        source: reqwest::Error,
    },
    #[snafu(display("conversation endpoint returned status {status}"))]
    UnexpectedStatus { stage: &'static str, status: u16 },
    #[snafu(display("failed to decode conversation reply on `{stage}`: {source}"))]
    DecodeReply {
        stage: &'static str,
        source: reqwest::Error,
    },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Seam between the message dispatcher and the remote concierge service.
///
/// The widget core only ever performs one exchange at a time through this
/// trait; implementations may be shared across widget instances.
pub trait ConversationBackend: Send + Sync {
    /// Performs one request/response exchange with the backend.
    fn send_message<'a>(
        &'a self,
        request: &'a ConversationRequest,
    ) -> BoxFuture<'a, ClientResult<ConversationReply>>;
}
