//! Event Loop - Main TUI entry point and event handling

use super::render::draw_ui;
use crate::client::GreetingClient;
use crate::form::{dispatch, Completion, GreetingForm};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the form until the user quits
pub async fn run(client: GreetingClient) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!(
            "Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).",
            e
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode(); // Cleanup attempt
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut form = GreetingForm::new();
    let (tx, mut rx) = mpsc::unbounded_channel();

    info!("Form started, endpoint {}", client.base());
    let result = run_event_loop(&mut terminal, &mut form, &client, tx, &mut rx).await;

    // Restore terminal (always attempt cleanup)
    let cleanup_result = restore_terminal(&mut terminal);
    info!("Form closed");

    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    form: &mut GreetingForm,
    client: &GreetingClient,
    tx: mpsc::UnboundedSender<Completion>,
    rx: &mut mpsc::UnboundedReceiver<Completion>,
) -> Result<()> {
    let endpoint = client.base().to_string();

    loop {
        // Apply whatever finished since the last frame, in arrival order
        while let Ok(completion) = rx.try_recv() {
            form.apply(completion);
        }

        terminal.draw(|f| draw_ui(f, form, &endpoint))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(submission) = form.handle_key(key.code, key.modifiers) {
                        dispatch(client, submission, tx.clone());
                    }
                }
            }
        }

        if form.should_quit() {
            break;
        }

        // Let in-flight requests progress on this worker too
        tokio::task::yield_now().await;
    }

    Ok(())
}
