//! Comparison workbench data
//!
//! Everything the comparison view draws is derived here from the resolved
//! records: radar axes, ranked bar series and the side-by-side metric table.

use crate::catalog::Catalog;
use crate::types::model::format_tokens;
use crate::types::{ModelId, ModelRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadarAxis {
    Safety,
    Governance,
    Performance,
}

impl RadarAxis {
    pub const ALL: [RadarAxis; 3] = [RadarAxis::Safety, RadarAxis::Governance, RadarAxis::Performance];

    pub fn label(self) -> &'static str {
        match self {
            RadarAxis::Safety => "Safety",
            RadarAxis::Governance => "Governance",
            RadarAxis::Performance => "Performance",
        }
    }

    pub fn score(self, model: &ModelRecord) -> f64 {
        match self {
            RadarAxis::Safety => model.radar_scores.safety,
            RadarAxis::Governance => model.radar_scores.governance,
            RadarAxis::Performance => model.radar_scores.performance,
        }
    }
}

/// Name, company and color of one compared model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSummary {
    pub id: ModelId,
    pub name: String,
    pub company: String,
    pub color: String,
    pub description: String,
}

impl From<&ModelRecord> for ModelSummary {
    fn from(model: &ModelRecord) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            company: model.company.clone(),
            color: model.color.clone(),
            description: model.description.clone(),
        }
    }
}

/// One model's value on a radar axis
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesValue {
    pub id: ModelId,
    pub value: f64,
}

/// One radar axis with a value per compared model
#[derive(Debug, Clone, PartialEq)]
pub struct RadarPoint {
    pub axis: RadarAxis,
    pub values: Vec<SeriesValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub id: ModelId,
    pub name: String,
    pub color: String,
    pub value: f64,
    /// 1-based position by value, highest first; ties share a rank
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub id: ModelId,
    pub color: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: &'static str,
    pub unit: Option<&'static str>,
    /// Direction hint shown next to the label
    pub note: Option<&'static str>,
    pub cells: Vec<TableCell>,
}

/// Derived chart and table data for the comparison view
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonData {
    pub models: Vec<ModelSummary>,
    pub radar: Vec<RadarPoint>,
    pub mmlu_bars: Vec<Bar>,
    pub context_bars: Vec<Bar>,
    pub table: Vec<MetricRow>,
}

impl ComparisonData {
    /// Resolve `ids` against the catalog and derive the view data.
    ///
    /// Returns `None` when nothing resolves, which the view renders as its
    /// empty state.
    pub fn build(catalog: &Catalog, ids: &[ModelId]) -> Option<Self> {
        let models = catalog.resolve(ids);
        if models.is_empty() {
            return None;
        }
        let unknown = catalog.unknown_ids(ids);
        if !unknown.is_empty() {
            tracing::warn!("Comparison dropped unknown model id(s) {:?}", unknown);
        }
        Some(Self::from_records(&models))
    }

    pub fn from_records(models: &[&ModelRecord]) -> Self {
        let radar = RadarAxis::ALL
            .iter()
            .map(|&axis| RadarPoint {
                axis,
                values: models
                    .iter()
                    .map(|m| SeriesValue {
                        id: m.id,
                        value: axis.score(m),
                    })
                    .collect(),
            })
            .collect();

        Self {
            models: models.iter().map(|m| ModelSummary::from(*m)).collect(),
            radar,
            mmlu_bars: ranked_bars(models, |m| m.mmlu),
            context_bars: ranked_bars(models, |m| m.context_tokens as f64),
            table: metric_table(models),
        }
    }

    pub fn color_of(&self, id: ModelId) -> Option<&str> {
        self.models
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.color.as_str())
    }
}

fn ranked_bars(models: &[&ModelRecord], value: impl Fn(&ModelRecord) -> f64) -> Vec<Bar> {
    let values: Vec<f64> = models.iter().map(|m| value(m)).collect();
    models
        .iter()
        .zip(&values)
        .map(|(m, &v)| Bar {
            id: m.id,
            name: m.name.clone(),
            color: m.color.clone(),
            value: v,
            rank: 1 + values.iter().filter(|&&other| other > v).count(),
        })
        .collect()
}

fn percent(value: f64) -> String {
    format!("{}%", value)
}

fn metric_row(
    models: &[&ModelRecord],
    label: &'static str,
    unit: Option<&'static str>,
    note: Option<&'static str>,
    display: impl Fn(&ModelRecord) -> String,
) -> MetricRow {
    MetricRow {
        label,
        unit,
        note,
        cells: models
            .iter()
            .map(|m| TableCell {
                id: m.id,
                color: m.color.clone(),
                display: display(m),
            })
            .collect(),
    }
}

fn metric_table(models: &[&ModelRecord]) -> Vec<MetricRow> {
    vec![
        metric_row(models, "MMLU Benchmark Score", None, None, |m| percent(m.mmlu)),
        metric_row(models, "HumanEval Code Score", None, None, |m| percent(m.human_eval)),
        metric_row(models, "Max Context Window", Some("Tokens"), None, |m| {
            format_tokens(m.context_tokens)
        }),
        metric_row(
            models,
            "Jailbreak Resistance",
            None,
            Some("Lower is better"),
            |m| percent(m.safety.jailbreak_resistance),
        ),
    ]
}

/// SVG `points` attribute for one model's radar polygon.
///
/// Axes are spread evenly starting straight up; each value in 0-100 scales
/// the distance from `center` up to `radius`.
pub fn radar_polygon(values: &[f64], center: (f64, f64), radius: f64) -> String {
    radar_vertices(values, center, radius)
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn radar_vertices(values: &[f64], center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    let n = values.len().max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let angle = -std::f64::consts::FRAC_PI_2 + i as f64 * std::f64::consts::TAU / n;
            let r = radius * v.clamp(0.0, 100.0) / 100.0;
            (center.0 + r * angle.cos(), center.1 + r * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resolution_yields_none() {
        let catalog = Catalog::embedded().unwrap();
        assert!(ComparisonData::build(&catalog, &[]).is_none());
        assert!(ComparisonData::build(&catalog, &[42, 999]).is_none());
    }

    #[test]
    fn test_unknown_ids_are_dropped() {
        let catalog = Catalog::embedded().unwrap();
        let data = ComparisonData::build(&catalog, &[3, 999, 1]).unwrap();
        let ids: Vec<ModelId> = data.models.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_duplicate_ids_compare_once() {
        let catalog = Catalog::embedded().unwrap();
        let data = ComparisonData::build(&catalog, &[1, 2, 2]).unwrap();
        assert_eq!(data.models.len(), 2);
        assert!(catalog.unknown_ids(&[1, 2, 2]).is_empty());
    }

    #[test]
    fn test_radar_has_one_point_per_axis_and_one_series_per_model() {
        let catalog = Catalog::embedded().unwrap();
        let data = ComparisonData::build(&catalog, &[1, 2, 4]).unwrap();
        assert_eq!(data.radar.len(), 3);
        let axes: Vec<RadarAxis> = data.radar.iter().map(|p| p.axis).collect();
        assert_eq!(axes, RadarAxis::ALL.to_vec());
        for point in &data.radar {
            assert_eq!(point.values.len(), 3);
        }
        let safety = &data.radar[0];
        assert_eq!(safety.values[0], SeriesValue { id: 1, value: 95.0 });
        assert_eq!(safety.values[1], SeriesValue { id: 2, value: 98.0 });
    }

    #[test]
    fn test_bars_keep_order_and_carry_rank() {
        let catalog = Catalog::embedded().unwrap();
        let data = ComparisonData::build(&catalog, &[1, 2, 3]).unwrap();

        let mmlu: Vec<(ModelId, usize)> = data.mmlu_bars.iter().map(|b| (b.id, b.rank)).collect();
        assert_eq!(mmlu, vec![(1, 1), (2, 2), (3, 3)]);

        let context: Vec<(ModelId, usize)> =
            data.context_bars.iter().map(|b| (b.id, b.rank)).collect();
        assert_eq!(context, vec![(1, 3), (2, 2), (3, 1)]);
        assert_eq!(data.context_bars[2].value, 1_000_000.0);
    }

    #[test]
    fn test_tied_values_share_rank() {
        let catalog = Catalog::embedded().unwrap();
        let data = ComparisonData::build(&catalog, &[1, 4, 6]).unwrap();
        assert!(data.context_bars.iter().all(|b| b.rank == 1));
    }

    #[test]
    fn test_table_rows() {
        let catalog = Catalog::embedded().unwrap();
        let data = ComparisonData::build(&catalog, &[1, 2]).unwrap();
        let labels: Vec<&str> = data.table.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "MMLU Benchmark Score",
                "HumanEval Code Score",
                "Max Context Window",
                "Jailbreak Resistance"
            ]
        );
        assert_eq!(data.table[0].cells[0].display, "88.7%");
        assert_eq!(data.table[1].cells[1].display, "92%");
        assert_eq!(data.table[2].cells[1].display, "200,000");
        assert_eq!(data.table[2].unit, Some("Tokens"));
        assert_eq!(data.table[3].note, Some("Lower is better"));
        assert_eq!(data.table[3].cells[0].display, "2.3%");
    }

    #[test]
    fn test_colors_come_from_records() {
        let catalog = Catalog::embedded().unwrap();
        let data = ComparisonData::build(&catalog, &[2, 5]).unwrap();
        assert_eq!(data.color_of(2), Some("#F97316"));
        assert_eq!(data.color_of(5), Some("#EAB308"));
        assert_eq!(data.mmlu_bars[0].color, "#F97316");
        assert_eq!(data.table[0].cells[1].color, "#EAB308");
    }

    #[test]
    fn test_radar_vertices() {
        let vertices = radar_vertices(&[100.0, 0.0, 50.0], (100.0, 100.0), 80.0);
        assert!((vertices[0].0 - 100.0).abs() < 1e-9);
        assert!((vertices[0].1 - 20.0).abs() < 1e-9);
        assert!((vertices[1].0 - 100.0).abs() < 1e-9);
        assert!((vertices[1].1 - 100.0).abs() < 1e-9);
        assert!(vertices[2].0 < 100.0);
        assert!(vertices[2].1 > 100.0);
        assert_eq!(radar_polygon(&[100.0], (0.0, 0.0), 10.0), "0.0,-10.0");
    }
}
