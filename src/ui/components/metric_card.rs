//! Metric card with an expandable source trace

use crate::console::detail::Metric;
use dioxus::prelude::*;

#[component]
pub fn MetricCard(
    metric: Metric,
    accent: String,
    open: bool,
    on_toggle: EventHandler<&'static str>,
) -> Element {
    let key = metric.key;
    let chevron = if open { "▴" } else { "▾" };

    rsx! {
        div {
            class: "metric-card",

            h3 { class: "metric-title", "{metric.title}" }

            div {
                class: "metric-value-row",
                span { class: "metric-value", style: "color: {accent};", "{metric.value}" }
                if let Some(unit) = metric.unit {
                    span { class: "metric-unit", "{unit}" }
                }
            }

            p { class: "metric-description", "{metric.description}" }

            button {
                class: "source-trace-toggle",
                style: "color: {accent};",
                onclick: move |_| on_toggle.call(key),
                "Source Trace {chevron}"
            }

            if open {
                div { class: "source-trace", "{metric.source}" }
            }
        }
    }
}
