//! Greeting form state
//!
//! Two fields: the name being typed and the last greeting received. The event
//! loop is the only writer. Submissions run as spawned tasks and report back
//! through a channel; completions are applied in arrival order, so when
//! requests overlap the one that finishes last wins.

use crate::client::GreetingClient;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// One submit press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Increases with every submit, for log correlation only
    pub seq: u64,
    pub name: String,
}

/// A request that finished with a decodable body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub seq: u64,
    pub greeting: Option<String>,
}

#[derive(Debug, Default)]
pub struct GreetingForm {
    /// Current input buffer
    name: String,
    /// Cursor position, in chars
    cursor_pos: usize,
    /// Last greeting received
    greeting: Option<String>,
    next_seq: u64,
    should_quit: bool,
}

impl GreetingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// The part of the name left of the cursor
    pub fn before_cursor(&self) -> &str {
        &self.name[..self.byte_index(self.cursor_pos)]
    }

    pub fn greeting(&self) -> Option<&str> {
        self.greeting.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.name
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.name.len())
    }

    fn char_len(&self) -> usize {
        self.name.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_pos);
        self.name.insert(at, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            let at = self.byte_index(self.cursor_pos - 1);
            self.name.remove(at);
            self.cursor_pos -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_len() {
            let at = self.byte_index(self.cursor_pos);
            self.name.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    /// Snapshot the current name. Nothing is validated or cleared.
    pub fn submit(&mut self) -> Submission {
        self.next_seq += 1;
        Submission {
            seq: self.next_seq,
            name: self.name.clone(),
        }
    }

    /// Replace the greeting wholesale
    pub fn apply(&mut self, completion: Completion) {
        debug!(seq = completion.seq, "Applying greeting");
        self.greeting = completion.greeting;
    }

    /// Handle key press. Returns a submission when Enter was pressed.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Option<Submission> {
        match (key, modifiers) {
            // Quit
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL)
            | (KeyCode::Esc, _) => {
                self.should_quit = true;
            }

            (KeyCode::Enter, _) => return Some(self.submit()),

            (KeyCode::Backspace, _) => self.backspace(),
            (KeyCode::Delete, _) => self.delete(),
            (KeyCode::Left, _) => self.move_left(),
            (KeyCode::Right, _) => self.move_right(),

            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => self.move_home(),
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => self.move_end(),

            // Regular character input
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                self.insert_char(c);
            }

            _ => {}
        }

        None
    }
}

/// Run one submission in the background.
///
/// A completion is sent only when the exchange succeeds. Failures are logged
/// and dropped, leaving the greeting as it was.
pub fn dispatch(
    client: &GreetingClient,
    submission: Submission,
    tx: mpsc::UnboundedSender<Completion>,
) -> JoinHandle<()> {
    let client = client.clone();
    info!(seq = submission.seq, "Submitting name: {}", submission.name);

    tokio::spawn(async move {
        match client.fetch_greeting(&submission.name).await {
            Ok(greeting) => {
                // The form may already be gone
                let _ = tx.send(Completion {
                    seq: submission.seq,
                    greeting,
                });
            }
            Err(e) => {
                warn!(seq = submission.seq, "Greeting request failed: {:#}", e);
            }
        }
    })
}
