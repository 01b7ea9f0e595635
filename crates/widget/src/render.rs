use crate::chat::Role;

/// Commands the core issues to its passive rendering collaborator.
///
/// The sink owns all markup, styling and theming; the core never touches
/// concrete elements. `render_message` implies scrolling the message list
/// to the newest bubble. Implementations carry no conversation logic.
pub trait RenderSink {
    /// Draws one message bubble for the given speaker.
    fn render_message(&mut self, role: Role, text: &str);
    /// Shows or hides the "concierge is typing" signal.
    fn set_typing_indicator(&mut self, visible: bool);
    /// Shows or hides the chat panel.
    fn set_panel_open(&mut self, open: bool);
    /// Moves keyboard focus into the text input.
    fn focus_input(&mut self);
    /// Empties the text input after a send.
    fn clear_input(&mut self);
}
