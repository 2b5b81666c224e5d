//! Console listing page
//!
//! Search, filter sidebar, the model card grid and the comparison bar. Filter
//! and selection state live here and are dropped when the page is left.

pub mod comparison_bar;
pub mod filter_sidebar;
pub mod model_card;

use crate::app::AppState;
use crate::console::{filter, CompareAction, FilterCriteria, SelectionSet};
use crate::route::Route;
use crate::types::ModelId;
use comparison_bar::ComparisonBar;
use dioxus::prelude::*;
use filter_sidebar::FilterSidebar;
use model_card::ModelCard;

#[component]
pub fn ConsolePage() -> Element {
    let app_state = use_context::<AppState>();
    let catalog = app_state.catalog;

    let mut criteria = use_signal(|| {
        FilterCriteria::with_min_context_k(app_state.settings.read().default_min_context_k)
    });
    let mut selection = use_signal(SelectionSet::new);
    let mut show_mobile_filters = use_signal(|| false);

    let visible = filter(catalog, &criteria.read());
    let selected = selection.read().resolve(catalog);
    let action = CompareAction::for_selection(&selection.read(), catalog);
    let companies: Vec<String> = catalog.companies().into_iter().map(String::from).collect();
    let filters_class = if show_mobile_filters() { "filters-panel open" } else { "filters-panel" };

    rsx! {
        div {
            class: "page console-page",

            nav {
                class: "top-nav",
                button {
                    class: "brand",
                    onclick: move |_| app_state.navigate(Route::Home),
                    span { class: "accent", "NEURO" }
                    "DASH"
                }
                div {
                    class: "nav-actions",
                    button {
                        class: "nav-link",
                        onclick: move |_| app_state.navigate(Route::Evaluate),
                        "Evaluate"
                    }
                    div {
                        class: "nav-count",
                        p { class: "metric-caption", "Total Models" }
                        p { class: "accent count", "{visible.len()}" }
                    }
                }
            }

            div {
                class: "page-content",

                div {
                    class: "page-header",
                    h1 { "The Normalized Lab Console" }
                    p { class: "muted", "AI Model Transparency and Comparison Dashboard" }
                }

                input {
                    class: "search-input",
                    r#type: "text",
                    value: "{criteria.read().search}",
                    placeholder: "Search models by name or company...",
                    oninput: move |evt| criteria.write().search = evt.value(),
                }

                button {
                    class: "mobile-filter-toggle",
                    onclick: move |_| show_mobile_filters.toggle(),
                    if show_mobile_filters() { "Hide Filters" } else { "Show Filters" }
                }

                div {
                    class: "console-body",

                    div {
                        class: "{filters_class}",
                        div { class: "filters-label", "Filters" }
                        FilterSidebar {
                            criteria: criteria.read().clone(),
                            companies,
                            on_toggle_company: move |company: String| criteria.write().toggle_company(&company),
                            on_toggle_type: move |model_type| criteria.write().toggle_type(model_type),
                            on_min_context_k: move |k| criteria.write().set_min_context_k(k),
                        }
                    }

                    div {
                        class: "card-area",

                        div {
                            class: "count-bar",
                            p { class: "muted", "Showing {visible.len()} of {catalog.len()} models" }
                            // Display only; the listing keeps catalog order
                            span { class: "sort-label", "Sort by: ", span { class: "accent", "MMLU Score" } }
                        }

                        if visible.is_empty() {
                            div {
                                class: "empty-state",
                                "No models match your criteria."
                                button {
                                    class: "link-button",
                                    onclick: move |_| criteria.write().reset(),
                                    "Reset Filters"
                                }
                            }
                        } else {
                            div {
                                class: "card-grid",
                                for model in visible.iter().copied() {
                                    ModelCard {
                                        key: "{model.id}",
                                        model,
                                        is_comparing: selection.read().contains(model.id),
                                        on_open: move |_| app_state.navigate(Route::model(model.id)),
                                        on_toggle_compare: move |_| selection.write().toggle(model.id),
                                    }
                                }
                            }
                        }
                    }
                }
            }

            ComparisonBar {
                selected,
                action,
                on_clear: move |_| selection.write().clear(),
                on_remove: move |id: ModelId| selection.write().remove(id),
                on_compare: move |ids: Vec<ModelId>| app_state.navigate(Route::compare(ids)),
            }
        }
    }
}
