/// Conversation panel domain: messages, transcript, deterministic state.
pub mod chat;
/// Embed configuration read from the hosting declaration.
pub mod config;
/// Rendering sink contract driven by the core.
pub mod render;
/// Fail-soft session identity acquisition.
pub mod session;
/// Widget instance assembly and message dispatch.
pub mod widget;

pub use chat::{
    ExchangeState, Message, PanelState, PanelTransition, Role, Transcript,
};
pub use config::{ConfigError, DEFAULT_API_URL, DEFAULT_THEME_COLOR, EmbedOptions};
pub use render::RenderSink;
pub use session::acquire_session_id;
pub use widget::{CONNECTION_APOLOGY, ConciergeWidget, GREETING};
