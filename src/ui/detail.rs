//! Single-model detail page

use crate::app::AppState;
use crate::console::detail::{is_audit_tag, resolve_detail, tab_metrics, DetailState, MetricTab};
use crate::route::Route;
use crate::ui::components::{BackLink, MetricCard, TabButton};
use dioxus::prelude::*;

#[component]
pub fn ModelDetailPage(id: String) -> Element {
    let app_state = use_context::<AppState>();
    let mut state = use_signal(DetailState::default);

    let Some(model) = resolve_detail(app_state.catalog, &id) else {
        return rsx! {
            div {
                class: "page detail-page",
                div {
                    class: "empty-state",
                    h2 { "No models available." }
                    BackLink { label: "Back to Console".to_string(), to: Route::Console }
                }
            }
        };
    };

    let active_tab = state.read().active_tab();
    let metrics = tab_metrics(model, active_tab);

    rsx! {
        div {
            class: "page detail-page",

            div {
                class: "page-content",
                BackLink { label: "Back to Console".to_string(), to: Route::Console }

                div {
                    class: "detail-header",
                    p { class: "metric-caption", "{model.company}" }
                    h1 { style: "color: {model.color};", "{model.name}" }
                    p { class: "muted", "{model.description}" }
                    div {
                        class: "card-tags",
                        span { class: "chip", "{model.model_type}" }
                        span { class: "chip", "{model.context_label} context" }
                        for tag in model.tags.iter() {
                            span {
                                key: "{tag}",
                                class: if is_audit_tag(tag) { "chip audited" } else { "chip" },
                                "{tag}"
                            }
                        }
                    }
                }

                div {
                    class: "tab-row",
                    for tab in MetricTab::ALL {
                        TabButton {
                            key: "{tab.label()}",
                            active: tab == active_tab,
                            onclick: move |_| state.write().select_tab(tab),
                            label: tab.label().to_string(),
                            accent: tab.accent().to_string(),
                        }
                    }
                }

                div {
                    class: "metric-grid",
                    {metrics.into_iter().map(|metric| {
                        let key = metric.key;
                        let open = state.read().is_open(key);
                        rsx! {
                            MetricCard {
                                key: "{key}",
                                metric,
                                accent: active_tab.accent().to_string(),
                                open,
                                on_toggle: move |key| state.write().toggle_metric(key),
                            }
                        }
                    })}
                }
            }
        }
    }
}
