//! Listing filters: company and type checkboxes plus the context slider

use crate::console::filter::{FilterCriteria, CONTEXT_STEP_K, MAX_CONTEXT_K};
use crate::types::ModelType;
use dioxus::prelude::*;

#[component]
pub fn FilterSidebar(
    criteria: FilterCriteria,
    companies: Vec<String>,
    on_toggle_company: EventHandler<String>,
    on_toggle_type: EventHandler<ModelType>,
    on_min_context_k: EventHandler<u64>,
) -> Element {
    let min_k = criteria.min_context_k();
    let fill = min_k as f64 / MAX_CONTEXT_K as f64 * 100.0;

    rsx! {
        div {
            class: "filter-sidebar",

            div {
                h3 { class: "filter-heading", "Company" }
                div {
                    class: "filter-group",
                    {companies.into_iter().map(|company| {
                        let checked = criteria.companies.contains(&company);
                        let label = company.clone();
                        rsx! {
                            Checkbox {
                                key: "{label}",
                                label: label.clone(),
                                checked: checked,
                                onchange: move |_| on_toggle_company.call(company.clone()),
                            }
                        }
                    })}
                }
            }

            div {
                h3 { class: "filter-heading", "Model Type" }
                div {
                    class: "filter-group",
                    for model_type in ModelType::ALL {
                        Checkbox {
                            key: "{model_type}",
                            label: model_type.label().to_string(),
                            checked: criteria.types.contains(&model_type),
                            onchange: move |_| on_toggle_type.call(model_type),
                        }
                    }
                }
            }

            div {
                h3 { class: "filter-heading", "Min Context Window" }
                span { class: "slider-value", "{min_k}k ", span { class: "metric-unit", "Tokens" } }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{MAX_CONTEXT_K}",
                    step: "{CONTEXT_STEP_K}",
                    value: "{min_k}",
                    style: "background: linear-gradient(to right, #06B6D4 {fill}%, rgba(255, 255, 255, 0.1) {fill}%);",
                    oninput: move |evt| match evt.value().parse::<u64>() {
                        Ok(k) => on_min_context_k.call(k),
                        Err(e) => tracing::warn!("Ignoring slider value {:?}: {}", evt.value(), e),
                    },
                }
                div {
                    class: "slider-scale",
                    span { "0k" }
                    span { "500k" }
                    span { "1M" }
                }
            }
        }
    }
}

#[component]
fn Checkbox(label: String, checked: bool, onchange: EventHandler<()>) -> Element {
    rsx! {
        label {
            class: if checked { "checkbox checked" } else { "checkbox" },
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| onchange.call(()),
            }
            span { "{label}" }
        }
    }
}
