//! Message types
//!
//! Defines the chat widget's message structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// Typed by the user
    User,
    /// Produced by the assistant bot
    Bot,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new message stamped with the current time
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = ChatMessage::new(Sender::User, "Hello, world!");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "Hello, world!");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::new(Sender::Bot, "a");
        let b = ChatMessage::new(Sender::Bot, "a");
        assert_ne!(a.id, b.id);
    }
}
