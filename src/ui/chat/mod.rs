//! Floating assistant chat widget

pub mod input;
pub mod message;

use crate::app::AppState;
use crate::assistant::await_reply;
use dioxus::prelude::*;
use input::ChatInput;
use message::{MessageBubble, TypingIndicator};
use std::time::Duration;

#[component]
pub fn ChatWidget() -> Element {
    let app_state = use_context::<AppState>();
    let mut chat = app_state.chat;

    let handle_send = move |text: String| {
        let Some(ticket) = chat.write().submit(&text) else {
            return;
        };
        let delay = Duration::from_millis(app_state.settings.read().chat_reply_delay_ms);

        spawn(async move {
            await_reply(delay).await;
            chat.write().deliver_reply(ticket);
        });
    };

    let session = chat.read();
    let is_open = session.is_open();
    let is_typing = session.is_typing();
    let messages = session.messages().to_vec();
    drop(session);

    rsx! {
        div {
            class: "chat-widget",

            if is_open {
                div {
                    class: "chat-panel",
                    div {
                        class: "chat-header",
                        div {
                            h4 { "NeuroBot" }
                            p { class: "chat-status", "Online" }
                        }
                        button {
                            class: "chat-close",
                            title: "Close",
                            onclick: move |_| chat.write().close(),
                            "×"
                        }
                    }

                    div {
                        class: "chat-messages",
                        {messages.into_iter().map(|message| {
                            let id = message.id;
                            rsx! { MessageBubble { key: "{id}", message } }
                        })}
                        if is_typing {
                            TypingIndicator {}
                        }
                    }

                    ChatInput { on_send: handle_send, is_typing }
                }
            }

            button {
                class: if is_open { "chat-toggle open" } else { "chat-toggle" },
                title: if is_open { "Close chat" } else { "Open chat" },
                onclick: move |_| chat.write().toggle(),
                if is_open { "×" } else { "💬" }
            }
        }
    }
}
