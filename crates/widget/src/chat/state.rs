/// Panel visibility lifecycle. Starts closed; toggles indefinitely for the
/// page lifetime, there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    is_open: bool,
    has_greeted: bool,
}

/// Outcome of one toggle, telling the controller which side effects to
/// drive on the rendering sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTransition {
    Opened { should_greet: bool },
    Closed,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn has_greeted(&self) -> bool {
        self.has_greeted
    }

    /// Flips visibility deterministically.
    ///
    /// `transcript_empty` decides whether a `Closed → Open` transition
    /// carries the one-time greeting; `has_greeted` moves false→true at
    /// most once per panel instance.
    pub fn toggle(&mut self, transcript_empty: bool) -> PanelTransition {
        self.is_open = !self.is_open;
        if !self.is_open {
            return PanelTransition::Closed;
        }

        let should_greet = transcript_empty && !self.has_greeted;
        if should_greet {
            self.has_greeted = true;
        }
        PanelTransition::Opened { should_greet }
    }
}

/// Lifecycle of one backend exchange.
///
/// The dispatcher holds the widget's exclusive borrow across the entire
/// exchange, so at most one may be awaiting a reply at any point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeState {
    #[default]
    Idle,
    AwaitingReply,
}

impl ExchangeState {
    /// Marks a send as started; the typing indicator becomes visible.
    pub fn begin(&mut self) {
        *self = Self::AwaitingReply;
    }

    /// Marks the reply or error as handled; the typing indicator hides.
    pub fn resolve(&mut self) {
        *self = Self::Idle;
    }

    pub fn awaiting_reply(&self) -> bool {
        matches!(self, Self::AwaitingReply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_tracks_toggle_parity_starting_closed() {
        let mut panel = PanelState::new();
        assert!(!panel.is_open());

        for count in 1..=9 {
            panel.toggle(false);
            assert_eq!(panel.is_open(), count % 2 == 1);
        }
    }

    #[test]
    fn greeting_fires_only_on_first_open_with_empty_transcript() {
        let mut panel = PanelState::new();

        assert_eq!(
            panel.toggle(true),
            PanelTransition::Opened { should_greet: true }
        );
        assert!(panel.has_greeted());

        assert_eq!(panel.toggle(false), PanelTransition::Closed);
        assert_eq!(
            panel.toggle(false),
            PanelTransition::Opened { should_greet: false }
        );
    }

    #[test]
    fn opening_with_existing_transcript_never_greets() {
        let mut panel = PanelState::new();
        assert_eq!(
            panel.toggle(false),
            PanelTransition::Opened { should_greet: false }
        );
        assert!(!panel.has_greeted());
    }

    #[test]
    fn exchange_state_round_trips_through_awaiting_reply() {
        let mut exchange = ExchangeState::default();
        assert!(!exchange.awaiting_reply());

        exchange.begin();
        assert!(exchange.awaiting_reply());

        exchange.resolve();
        assert!(!exchange.awaiting_reply());
    }
}
