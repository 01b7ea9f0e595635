use crate::render::RenderSink;

use super::message::{Message, Role};

/// Ordered guest/concierge messages for the current panel lifetime.
///
/// Append-only with no size cap; content lives only as long as the page,
/// while the session identifier persists separately. The dispatcher trims
/// and rejects blank input upstream, so the transcript never holds an
/// empty guest message.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message and instructs the sink to draw the new bubble.
    /// Rendering scrolls the message list to the newest entry.
    pub fn append(&mut self, role: Role, text: impl Into<String>, sink: &mut dyn RenderSink) {
        let message = Message::new(role, text);
        sink.render_message(message.role, &message.text);
        self.messages.push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
