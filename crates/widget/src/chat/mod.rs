/// Domain entities for the guest/concierge exchange.
pub mod message;
/// Deterministic panel and exchange state machines.
pub mod state;
/// Ordered message sequence for the current panel lifetime.
pub mod transcript;

pub use message::{Message, Role};
pub use state::{ExchangeState, PanelState, PanelTransition};
pub use transcript::Transcript;
