//! Chat message bubbles

use crate::types::message::{ChatMessage, Sender};
use dioxus::prelude::*;

#[component]
pub fn MessageBubble(message: ChatMessage) -> Element {
    let time = message.timestamp.format("%H:%M").to_string();

    match message.sender {
        // User message - right-aligned, accent-tinted
        Sender::User => rsx! {
            div { class: "message-row user",
                div { class: "message-user",
                    "{message.text}"
                    span { class: "message-time", "{time}" }
                }
            }
        },
        Sender::Bot => rsx! {
            div { class: "message-row bot",
                div { class: "bot-avatar", "✦" }
                div { class: "message-bot",
                    "{message.text}"
                    span { class: "message-time", "{time}" }
                }
            }
        },
    }
}

/// Three bouncing dots while a reply is pending
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message-row bot",
            div { class: "bot-avatar", "✦" }
            div { class: "message-bot typing",
                span { class: "typing-dot" }
                span { class: "typing-dot" }
                span { class: "typing-dot" }
            }
        }
    }
}
