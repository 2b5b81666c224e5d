//! Comparison workbench page

use crate::app::AppState;
use crate::console::compare::{radar_polygon, radar_vertices, Bar, ComparisonData, RadarAxis};
use crate::route::Route;
use crate::types::model::format_tokens;
use crate::types::ModelId;
use crate::ui::components::BackLink;
use dioxus::prelude::*;

const RADAR_CENTER: (f64, f64) = (150.0, 150.0);
const RADAR_RADIUS: f64 = 110.0;
const RADAR_RINGS: [f64; 4] = [25.0, 50.0, 75.0, 100.0];

#[component]
pub fn ComparePage(ids: Vec<ModelId>) -> Element {
    let app_state = use_context::<AppState>();

    let Some(data) = ComparisonData::build(app_state.catalog, &ids) else {
        return rsx! {
            div {
                class: "page compare-page",
                div {
                    class: "empty-state",
                    h2 { "No models selected." }
                    BackLink { label: "Back to Console".to_string(), to: Route::Console }
                }
            }
        };
    };

    let context_max = data
        .context_bars
        .iter()
        .map(|bar| bar.value)
        .fold(0.0, f64::max);

    rsx! {
        div {
            class: "page compare-page",

            div {
                class: "page-content",
                BackLink { label: "Back to Console".to_string(), to: Route::Console }

                div {
                    class: "page-header",
                    h1 { "Model Comparison" }
                    p { class: "muted", "Side-by-side analysis of {data.models.len()} model(s)" }
                }

                div {
                    class: "pill-row",
                    for model in data.models.iter() {
                        span {
                            key: "{model.id}",
                            class: "model-pill",
                            style: "border-color: {model.color}; color: {model.color};",
                            "{model.name}"
                        }
                    }
                }

                div {
                    class: "chart-grid",

                    div {
                        class: "chart-panel",
                        h3 { "Safety / Governance / Performance" }
                        RadarChart { data: data.clone() }
                    }

                    div {
                        class: "chart-panel",
                        h3 { "MMLU Benchmark" }
                        BarChart { bars: data.mmlu_bars.clone(), max: 100.0, tokens: false }
                    }

                    div {
                        class: "chart-panel",
                        h3 { "Context Window" }
                        BarChart { bars: data.context_bars.clone(), max: context_max, tokens: true }
                    }
                }

                div {
                    class: "table-panel",
                    h3 { "Metric Breakdown" }
                    table {
                        class: "metric-table",
                        thead {
                            tr {
                                th { "Metric" }
                                for model in data.models.iter() {
                                    th { key: "{model.id}", style: "color: {model.color};", "{model.name}" }
                                }
                            }
                        }
                        tbody {
                            for row in data.table.iter() {
                                tr {
                                    key: "{row.label}",
                                    td {
                                        class: "metric-label",
                                        "{row.label}"
                                        if let Some(note) = row.note {
                                            span { class: "metric-note", " ({note})" }
                                        }
                                    }
                                    for cell in row.cells.iter() {
                                        td {
                                            key: "{cell.id}",
                                            "{cell.display}"
                                            if let Some(unit) = row.unit {
                                                span { class: "metric-unit", " {unit}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "description-grid",
                    for model in data.models.iter() {
                        div {
                            key: "{model.id}",
                            class: "description-card",
                            style: "border-top-color: {model.color};",
                            h4 { "{model.name}" }
                            p { class: "metric-caption", "{model.company}" }
                            p { class: "muted", "{model.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RadarChart(data: ComparisonData) -> Element {
    let rings: Vec<String> = RADAR_RINGS
        .iter()
        .map(|&level| radar_polygon(&[level; 3], RADAR_CENTER, RADAR_RADIUS))
        .collect();
    let spokes = radar_vertices(&[100.0; 3], RADAR_CENTER, RADAR_RADIUS);
    let labels = radar_vertices(&[100.0; 3], RADAR_CENTER, RADAR_RADIUS + 24.0);

    let series: Vec<(ModelId, String, String)> = data
        .models
        .iter()
        .map(|model| {
            let values: Vec<f64> = data
                .radar
                .iter()
                .map(|point| {
                    point
                        .values
                        .iter()
                        .find(|v| v.id == model.id)
                        .map_or(0.0, |v| v.value)
                })
                .collect();
            (
                model.id,
                model.color.clone(),
                radar_polygon(&values, RADAR_CENTER, RADAR_RADIUS),
            )
        })
        .collect();

    rsx! {
        svg {
            class: "radar-chart",
            view_box: "0 0 300 300",

            for (i, points) in rings.iter().enumerate() {
                polygon {
                    key: "ring-{i}",
                    points: "{points}",
                    fill: "none",
                    stroke: "rgba(255, 255, 255, 0.12)",
                }
            }
            for (i, (x, y)) in spokes.iter().enumerate() {
                line {
                    key: "spoke-{i}",
                    x1: "{RADAR_CENTER.0}",
                    y1: "{RADAR_CENTER.1}",
                    x2: "{x:.1}",
                    y2: "{y:.1}",
                    stroke: "rgba(255, 255, 255, 0.12)",
                }
            }
            for (axis, (x, y)) in RadarAxis::ALL.iter().zip(labels.iter()) {
                text {
                    key: "{axis.label()}",
                    x: "{x:.1}",
                    y: "{y:.1}",
                    text_anchor: "middle",
                    class: "radar-label",
                    "{axis.label()}"
                }
            }
            for (id, color, points) in series.iter() {
                polygon {
                    key: "{id}",
                    points: "{points}",
                    fill: "{color}",
                    fill_opacity: "0.25",
                    stroke: "{color}",
                    stroke_width: "2",
                }
            }
        }
    }
}

#[component]
fn BarChart(bars: Vec<Bar>, max: f64, tokens: bool) -> Element {
    rsx! {
        div {
            class: "bar-chart",
            {bars.iter().map(|bar| {
                let width = if max > 0.0 { bar.value / max * 100.0 } else { 0.0 };
                let label = if tokens {
                    format_tokens(bar.value as u64)
                } else {
                    format!("{}%", bar.value)
                };
                rsx! {
                    div {
                        key: "{bar.id}",
                        class: "bar-row",
                        div {
                            class: "bar-meta",
                            span { class: "bar-rank", "#{bar.rank}" }
                            span { "{bar.name}" }
                            span { class: "bar-value", "{label}" }
                        }
                        div {
                            class: "bar-track",
                            div {
                                class: "bar-fill",
                                style: "width: {width:.1}%; background: {bar.color};",
                            }
                        }
                    }
                }
            })}
        }
    }
}
