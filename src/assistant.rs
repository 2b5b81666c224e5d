//! Assistant chat widget state
//!
//! The floating chat answers with a canned reply after a fixed delay that
//! stands in for a network round trip. A reply only lands if the panel is
//! still open in the same session it was requested from.

use crate::types::message::{ChatMessage, Sender};
use std::time::Duration;

pub const GREETING: &str = "Hello! I'm NeuroBot. How can I help you compare models today?";

pub const CANNED_REPLY: &str = "I've looked at your request. Open the console, filter by the \
    criteria you care about, and select two or more models to see them side by side.";

/// Handle for a reply that is still waiting on its timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTicket {
    session: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    open: bool,
    /// Bumped every time the panel opens
    session: u64,
    typing: bool,
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            open: false,
            session: 0,
            typing: false,
            messages: vec![ChatMessage::new(Sender::Bot, GREETING)],
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.session += 1;
        }
    }

    /// Close the panel; replies still in flight will be dropped
    pub fn close(&mut self) {
        self.open = false;
        self.typing = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Post a user message.
    ///
    /// Blank input and a closed panel are ignored. Otherwise the returned
    /// ticket must be redeemed with [`ChatSession::deliver_reply`] once the
    /// reply delay has elapsed.
    pub fn submit(&mut self, text: &str) -> Option<ReplyTicket> {
        if !self.open || text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(Sender::User, text));
        self.typing = true;
        Some(ReplyTicket {
            session: self.session,
        })
    }

    /// Append the bot reply for `ticket`; returns whether it was kept
    pub fn deliver_reply(&mut self, ticket: ReplyTicket) -> bool {
        if !self.open || ticket.session != self.session {
            tracing::debug!("Discarding assistant reply for a closed chat session");
            return false;
        }
        self.messages.push(ChatMessage::new(Sender::Bot, CANNED_REPLY));
        self.typing = false;
        true
    }
}

/// Stand-in for the assistant's network round trip
pub async fn await_reply(delay: Duration) {
    tokio::time::sleep(delay).await;
}
