use dioxus::prelude::*;

/// Pill-style tab; `accent` colors the active state
#[component]
pub fn TabButton(
    active: bool,
    onclick: EventHandler<MouseEvent>,
    label: String,
    accent: String,
) -> Element {
    let classes = if active { "tab-button active" } else { "tab-button" };
    let style = if active {
        format!("background: {accent}; color: #0B0E14;")
    } else {
        String::new()
    };

    rsx! {
        button {
            class: "{classes}",
            style: "{style}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
