//! Landing page

use crate::app::AppState;
use crate::route::Route;
use crate::storage::settings::Theme;
use dioxus::prelude::*;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "⚡",
        "Normalized Benchmarks",
        "MMLU, HumanEval and context limits side by side, on one scale.",
    ),
    (
        "🛡",
        "Safety Transparency",
        "Refusal and jailbreak rates with a source trace for every number.",
    ),
    (
        "⎇",
        "Governance Tracking",
        "Audit status and update cadence for each model provider.",
    ),
];

#[component]
pub fn HomePage() -> Element {
    let app_state = use_context::<AppState>();
    let theme = app_state.settings.read().theme;
    let theme_label = match theme {
        Theme::Dark => "☀ Light",
        Theme::Light => "☾ Dark",
    };

    rsx! {
        div {
            class: "page home-page",

            nav {
                class: "top-nav",
                div {
                    class: "brand",
                    span { class: "accent", "NEURO" }
                    "DASH"
                }
                div {
                    class: "nav-actions",
                    button {
                        class: "nav-link",
                        onclick: move |_| app_state.update_settings(|s| s.theme = s.theme.toggled()),
                        "{theme_label}"
                    }
                    button {
                        class: "nav-link",
                        onclick: move |_| app_state.navigate(Route::Console),
                        "Console"
                    }
                }
            }

            section {
                class: "hero",
                h1 {
                    "Unlock Intelligence with "
                    span { class: "text-gradient", "Precision AI" }
                }
                p {
                    class: "muted",
                    "Compare frontier models on performance, safety and governance. Filter the catalog, pick a shortlist and see the trade-offs."
                }
                button {
                    class: "compare-button",
                    onclick: move |_| app_state.navigate(Route::Console),
                    "Open the Console →"
                }
            }

            section {
                class: "features",
                h2 { "Why NeuroDash?" }
                div {
                    class: "feature-grid",
                    for (icon, title, desc) in FEATURES {
                        div {
                            key: "{title}",
                            class: "feature-card",
                            div { class: "feature-icon", "{icon}" }
                            h3 { "{title}" }
                            p { class: "muted", "{desc}" }
                        }
                    }
                }
            }

            footer {
                class: "footer muted",
                "© 2025 NeuroDash Inc. All rights reserved."
            }
        }
    }
}
