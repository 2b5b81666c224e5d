//! Chat input row with the send button

use dioxus::prelude::*;

#[component]
pub fn ChatInput(on_send: EventHandler<String>, is_typing: bool) -> Element {
    let mut text = use_signal(String::new);

    let can_send = !is_typing && !text().trim().is_empty();
    let send_class = if can_send { "chat-send" } else { "chat-send disabled" };

    let mut send = move || {
        if !text().trim().is_empty() {
            on_send.call(text());
            text.set(String::new());
        }
    };

    rsx! {
        div {
            class: "chat-input",
            input {
                r#type: "text",
                placeholder: "Ask me anything...",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && !is_typing {
                        evt.prevent_default();
                        send();
                    }
                },
            }
            button {
                class: "{send_class}",
                disabled: !can_send,
                title: "Send (Enter)",
                onclick: move |_| send(),
                svg {
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    line { x1: "22", y1: "2", x2: "11", y2: "13" }
                    polygon { points: "22 2 15 22 11 13 2 9 22 2" }
                }
            }
        }
    }
}
