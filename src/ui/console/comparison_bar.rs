//! Bottom bar listing the comparison selection

use crate::console::selection::CompareAction;
use crate::types::{ModelId, ModelRecord};
use dioxus::prelude::*;

#[component]
pub fn ComparisonBar(
    selected: Vec<&'static ModelRecord>,
    action: CompareAction,
    on_clear: EventHandler<()>,
    on_remove: EventHandler<ModelId>,
    on_compare: EventHandler<Vec<ModelId>>,
) -> Element {
    if selected.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "comparison-bar",

            div {
                class: "comparison-selected",
                h3 { class: "accent", "Selected ({selected.len()})" }
                for model in selected.iter().copied() {
                    div {
                        key: "{model.id}",
                        class: "selected-pill",
                        "{model.name}"
                        button {
                            class: "pill-remove",
                            title: "Remove",
                            onclick: move |_| on_remove.call(model.id),
                            "×"
                        }
                    }
                }
            }

            div {
                class: "comparison-actions",
                button {
                    class: "clear-all",
                    onclick: move |_| on_clear.call(()),
                    "Clear All"
                }
                match action {
                    CompareAction::Enabled { ids } => rsx! {
                        button {
                            class: "compare-button",
                            onclick: move |_| on_compare.call(ids.clone()),
                            "Compare Models →"
                        }
                    },
                    CompareAction::Disabled { hint } => rsx! {
                        button {
                            class: "compare-button disabled",
                            disabled: true,
                            title: "{hint}",
                            "Compare Models →"
                        }
                    },
                }
            }
        }
    }
}
