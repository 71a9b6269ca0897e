//! User notifications.

/// Message shown when the server reports the game is over.
pub const GAME_OVER_MESSAGE: &str = "The game is over. Resetting the board.";

/// Receives messages that must be brought to the user's attention.
pub trait Notifier {
    /// Shows `message` to the user.
    fn notify(&mut self, message: &str);
}

/// Notifier that keeps every message, most recent last.
///
/// The terminal front end drains it into a modal popup; tests inspect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    messages: Vec<String>,
}

impl NotificationQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Removes and returns the oldest message.
    pub fn pop_front(&mut self) -> Option<String> {
        if self.messages.is_empty() {
            None
        } else {
            Some(self.messages.remove(0))
        }
    }

    /// The oldest message without removing it.
    pub fn front(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }

    /// Whether no message is waiting.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, message: &str) {
        tracing::info!(message, "Notification");
        self.messages.push(message.to_string());
    }
}
