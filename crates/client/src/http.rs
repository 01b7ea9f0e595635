use futures::future::BoxFuture;
use snafu::ResultExt;

use crate::backend::{
    ClientResult, ConversationBackend, DecodeReplySnafu, InvalidEndpointSnafu, RequestSendSnafu,
    UnexpectedStatusSnafu,
};
use crate::wire::{ConversationReply, ConversationRequest};

/// Route of the conversation endpoint, relative to the configured base URL.
pub const CONVERSATIONS_PATH: &str = "/api/v1/conversations";

/// HTTP implementation of the conversation backend.
///
/// Performs exactly one `POST` per exchange. No timeout and no retry: a
/// hung request simply never resolves its exchange (see the dispatcher's
/// resource model).
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    /// Builds a backend for the given base URL, e.g. `http://localhost:8000`.
    /// Trailing slashes on the base are tolerated.
    pub fn new(api_url: &str) -> ClientResult<Self> {
        let base = api_url.trim().trim_end_matches('/');
        if let Err(error) = reqwest::Url::parse(base) {
            return InvalidEndpointSnafu {
                stage: "parse-conversation-endpoint",
                raw: api_url.to_string(),
                details: error.to_string(),
            }
            .fail();
        }

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: format!("{base}{CONVERSATIONS_PATH}"),
        })
    }

    /// Returns the fully resolved conversation endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn exchange(&self, request: &ConversationRequest) -> ClientResult<ConversationReply> {
        tracing::debug!(
            "posting conversation message for property '{}' to {}",
            request.property_id,
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .context(RequestSendSnafu {
                stage: "send-conversation-request",
            })?;

        let status = response.status();
        if !status.is_success() {
            return UnexpectedStatusSnafu {
                stage: "conversation-http-status",
                status: status.as_u16(),
            }
            .fail();
        }

        response
            .json::<ConversationReply>()
            .await
            .context(DecodeReplySnafu {
                stage: "decode-conversation-reply",
            })
    }
}

impl ConversationBackend for HttpBackend {
    fn send_message<'a>(
        &'a self,
        request: &'a ConversationRequest,
    ) -> BoxFuture<'a, ClientResult<ConversationReply>> {
        Box::pin(self.exchange(request))
    }
}
