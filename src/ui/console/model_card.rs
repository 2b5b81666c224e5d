//! Listing card for one model

use crate::types::{ModelRecord, ModelType};
use dioxus::prelude::*;

#[component]
pub fn ModelCard(
    model: &'static ModelRecord,
    is_comparing: bool,
    on_open: EventHandler<()>,
    on_toggle_compare: EventHandler<()>,
) -> Element {
    let type_icon = match model.model_type {
        ModelType::ClosedApi => "🔒",
        ModelType::OpenWeight => "</>",
        ModelType::Mixed => "✦",
    };
    let card_class = if is_comparing { "model-card comparing" } else { "model-card" };
    let switch_class = if is_comparing { "switch on" } else { "switch" };

    rsx! {
        div {
            class: "{card_class}",
            onclick: move |_| on_open.call(()),

            div {
                class: "card-top",
                div {
                    class: "card-company",
                    span { class: "type-icon", "{type_icon}" }
                    "{model.company}"
                }
                div {
                    class: "compare-toggle",
                    span { "Compare" }
                    // The card itself navigates, so the toggle must not bubble
                    button {
                        class: "{switch_class}",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_toggle_compare.call(());
                        },
                        div { class: "switch-knob" }
                    }
                }
            }

            h3 { class: "card-title", "{model.name}" }

            div {
                class: "card-metrics",
                div {
                    p { class: "metric-caption", "MMLU Score" }
                    p { class: "card-mmlu", "{model.mmlu}" span { class: "metric-unit", "%" } }
                }
                div {
                    p { class: "metric-caption", "Context Window" }
                    p { class: "card-context", "{model.context_label}" }
                }
            }

            div {
                class: "card-tags",
                span { class: "chip", "{model.model_type}" }
                if model.audited {
                    span { class: "chip audited", "Audited" }
                }
            }
        }
    }
}
