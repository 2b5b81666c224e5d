//! Evaluation policy setup page

use crate::app::AppState;
use crate::console::evaluate::{EvaluateView, PolicyPreset, MAX_UPLOAD_MB, POLICY_PRESETS};
use crate::route::Route;
use dioxus::prelude::*;

#[component]
pub fn EvaluatePage() -> Element {
    let app_state = use_context::<AppState>();
    let mut view = use_signal(EvaluateView::default);
    let current = view();

    rsx! {
        div {
            class: "page evaluate-page",

            div {
                class: "page-content",

                button {
                    class: "back-link",
                    onclick: move |_| match current.back() {
                        Some(previous) => view.set(previous),
                        None => app_state.navigate(Route::Console),
                    },
                    if current.back().is_some() { "← Back" } else { "← Back to Console" }
                }

                div {
                    class: "page-header",
                    h1 { "{current.title()}" }
                    p { class: "muted", "{current.subtitle()}" }
                }

                match current {
                    EvaluateView::Selection => rsx! {
                        div {
                            class: "choice-grid",
                            ChoiceCard {
                                title: "Use a Preset",
                                description: "Start from a curated policy tuned for safety, performance, or governance.",
                                onclick: move |_| view.set(EvaluateView::Preset),
                            }
                            ChoiceCard {
                                title: "Upload a Policy",
                                description: "Bring your own policy document and extract its evaluation criteria.",
                                onclick: move |_| view.set(EvaluateView::Upload),
                            }
                        }
                    },
                    EvaluateView::Preset => rsx! {
                        div {
                            class: "preset-grid",
                            for preset in POLICY_PRESETS.iter() {
                                PresetCard { key: "{preset.title}", preset: preset.clone() }
                            }
                        }
                    },
                    EvaluateView::Upload => rsx! {
                        div {
                            class: "upload-panel",
                            div { class: "upload-icon", "⇪" }
                            p { "Drag and drop your policy file here" }
                            p { class: "metric-caption", "PDF, DOCX or TXT up to {MAX_UPLOAD_MB}MB" }
                            button { class: "compare-button", disabled: true, "Browse Files" }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ChoiceCard(title: &'static str, description: &'static str, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "choice-card",
            onclick: move |evt| onclick.call(evt),
            h3 { "{title}" }
            p { class: "muted", "{description}" }
        }
    }
}

#[component]
fn PresetCard(preset: PolicyPreset) -> Element {
    let color = preset.focus.color();

    rsx! {
        div {
            class: "preset-card",
            span {
                class: "chip",
                style: "color: {color}; border-color: {color};",
                "{preset.focus.label()}"
            }
            h3 { "{preset.title}" }
            p { class: "muted", "{preset.description}" }
            ul {
                class: "criteria-list",
                for criterion in preset.criteria.iter() {
                    li { key: "{criterion}", "{criterion}" }
                }
            }
        }
    }
}
