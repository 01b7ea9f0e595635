use atrium_client::{ConversationBackend, ConversationRequest};
use atrium_storage::{SessionId, SessionIdentityStore};

use crate::chat::{ExchangeState, PanelState, PanelTransition, Role, Transcript};
use crate::config::{ConfigError, EmbedOptions};
use crate::render::RenderSink;
use crate::session;

/// Shown once, the first time the panel opens over an empty transcript.
pub const GREETING: &str = "Hi! 👋 Welcome to our hotel. How can I help you today?";

/// Shown in place of any failed exchange. Raw error detail never reaches
/// the transcript.
pub const CONNECTION_APOLOGY: &str =
    "Sorry, I am having trouble connecting to the concierge. Please try again.";

/// One mounted widget instance.
///
/// Owns all conversation state explicitly: session identity, transcript,
/// panel visibility and the exchange lifecycle. Several instances can
/// coexist in one process. UI event handlers call `toggle_panel` and
/// `send`; everything the visitor sees goes out through the sink.
pub struct ConciergeWidget<S, B>
where
    S: RenderSink,
    B: ConversationBackend,
{
    options: EmbedOptions,
    session_id: SessionId,
    transcript: Transcript,
    panel: PanelState,
    exchange: ExchangeState,
    sink: S,
    backend: B,
}

impl<S, B> ConciergeWidget<S, B>
where
    S: RenderSink,
    B: ConversationBackend,
{
    /// Validates the embed declaration, acquires the session identifier
    /// fail-soft, and assembles one instance.
    ///
    /// A missing property identifier aborts the mount: the caller logs
    /// the error and no UI is shown.
    pub fn mount(
        options: EmbedOptions,
        identity: &dyn SessionIdentityStore,
        sink: S,
        backend: B,
    ) -> Result<Self, ConfigError> {
        let options = options.normalized();
        options.validate()?;

        let session_id = session::acquire_session_id(identity);
        tracing::info!(
            "mounted concierge widget for property '{}' with session {}",
            options.property_id,
            session_id
        );

        Ok(Self {
            options,
            session_id,
            transcript: Transcript::new(),
            panel: PanelState::new(),
            exchange: ExchangeState::default(),
            sink,
            backend,
        })
    }

    pub fn options(&self) -> &EmbedOptions {
        &self.options
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn awaiting_reply(&self) -> bool {
        self.exchange.awaiting_reply()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Launcher click or header close-control click.
    ///
    /// Opening focuses the input; the first open over an empty transcript
    /// also appends the fixed greeting, exactly once per instance.
    pub fn toggle_panel(&mut self) {
        let transition = self.panel.toggle(self.transcript.is_empty());
        self.sink.set_panel_open(self.panel.is_open());

        match transition {
            PanelTransition::Opened { should_greet } => {
                self.sink.focus_input();
                if should_greet {
                    self.transcript
                        .append(Role::Concierge, GREETING, &mut self.sink);
                }
            }
            PanelTransition::Closed => {}
        }
    }

    /// Enter-key press or send-button click.
    ///
    /// Blank input is a complete no-op: nothing rendered, nothing sent.
    /// The method suspends only at the backend exchange; sends serialize
    /// per instance through the exclusive borrow, so a second send cannot
    /// start while an exchange is pending.
    pub async fn send(&mut self, raw_text: &str) {
        let text = raw_text.trim();
        if text.is_empty() {
            return;
        }

        self.transcript.append(Role::Guest, text, &mut self.sink);
        self.sink.clear_input();
        self.exchange.begin();
        self.sink.set_typing_indicator(true);

        let request = ConversationRequest::new(
            self.options.property_id.clone(),
            text,
            self.session_id.to_string(),
        );

        let outcome = self.backend.send_message(&request).await;
        self.exchange.resolve();
        self.sink.set_typing_indicator(false);

        match outcome {
            Ok(reply) => {
                self.transcript
                    .append(Role::Concierge, reply.response, &mut self.sink);
            }
            Err(error) => {
                tracing::error!("conversation exchange failed: {}", error);
                self.transcript
                    .append(Role::Concierge, CONNECTION_APOLOGY, &mut self.sink);
            }
        }
    }
}
