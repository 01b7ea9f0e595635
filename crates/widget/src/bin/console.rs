use std::io::{BufRead, Write};

use atrium::{ConciergeWidget, EmbedOptions, RenderSink, Role};
use atrium_client::HttpBackend;
use atrium_storage::FileIdentityStore;

/// Stdout rendering sink for manual smoke-chats against a live backend.
///
/// Panel visibility and input focus have no terminal meaning, so those
/// commands only surface as log lines.
struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn render_message(&mut self, role: Role, text: &str) {
        let speaker = match role {
            Role::Guest => "guest",
            Role::Concierge => "concierge",
        };
        println!("{speaker}> {text}");
    }

    fn set_typing_indicator(&mut self, visible: bool) {
        if visible {
            println!("… concierge is typing …");
        }
    }

    fn set_panel_open(&mut self, open: bool) {
        tracing::debug!("panel open: {open}");
    }

    fn focus_input(&mut self) {
        tracing::debug!("input focused");
    }

    fn clear_input(&mut self) {
        tracing::debug!("input cleared");
    }
}

/// Line-oriented chat console.
///
/// Reads the embed declaration from the default file and `ATRIUM_*`
/// environment variables, mounts one widget instance, and relays stdin
/// lines through the dispatcher until EOF or `/quit`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let options = EmbedOptions::load();

    let backend = match HttpBackend::new(&options.api_url) {
        Ok(backend) => backend,
        Err(error) => {
            tracing::error!("cannot reach a conversation endpoint: {}", error);
            return;
        }
    };

    let identity = FileIdentityStore::open_default();
    let mut widget = match ConciergeWidget::mount(options, &identity, ConsoleSink, backend) {
        Ok(widget) => widget,
        Err(error) => {
            // Fatal configuration error: log only, render nothing.
            tracing::error!("{}", error);
            return;
        }
    };

    // Open the panel once so the greeting shows, like a first launcher click.
    widget.toggle_panel();

    let stdin = std::io::stdin();
    loop {
        print!("you> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                tracing::error!("failed to read input: {}", error);
                break;
            }
        }

        if line.trim() == "/quit" {
            break;
        }

        widget.send(&line).await;
    }
}
