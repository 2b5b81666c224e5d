//! Model detail state
//!
//! Tab selection, the single-open "source trace" accordion, and the metric
//! cards shown under each tab.

use crate::catalog::Catalog;
use crate::types::model::format_tokens;
use crate::types::{ModelId, ModelRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricTab {
    #[default]
    Performance,
    Safety,
    Governance,
}

impl MetricTab {
    pub const ALL: [MetricTab; 3] = [MetricTab::Performance, MetricTab::Safety, MetricTab::Governance];

    pub fn label(self) -> &'static str {
        match self {
            MetricTab::Performance => "Performance",
            MetricTab::Safety => "Safety",
            MetricTab::Governance => "Governance",
        }
    }

    /// Accent color used for the tab button and its metric values
    pub fn accent(self) -> &'static str {
        match self {
            MetricTab::Performance => "#22D3EE",
            MetricTab::Safety => "#F97316",
            MetricTab::Governance => "#A855F7",
        }
    }
}

/// Transient state of the detail page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    active_tab: MetricTab,
    open_metric: Option<&'static str>,
}

impl DetailState {
    pub fn active_tab(&self) -> MetricTab {
        self.active_tab
    }

    pub fn open_metric(&self) -> Option<&'static str> {
        self.open_metric
    }

    /// Switch tabs; any expanded panel collapses
    pub fn select_tab(&mut self, tab: MetricTab) {
        self.active_tab = tab;
        self.open_metric = None;
    }

    /// Open `key`, or close it if it is already the open panel
    pub fn toggle_metric(&mut self, key: &'static str) {
        self.open_metric = if self.open_metric == Some(key) {
            None
        } else {
            Some(key)
        };
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open_metric == Some(key)
    }
}

/// Display contents of one metric card
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub key: &'static str,
    pub title: &'static str,
    pub value: String,
    pub unit: Option<&'static str>,
    pub description: &'static str,
    /// Body of the expandable source-trace panel
    pub source: &'static str,
}

/// Metric cards for `tab`, in display order
pub fn tab_metrics(model: &ModelRecord, tab: MetricTab) -> Vec<Metric> {
    match tab {
        MetricTab::Performance => vec![
            Metric {
                key: "perf-mmlu",
                title: "MMLU Benchmark Score",
                value: format!("{}%", model.mmlu),
                unit: None,
                description: "Measures accuracy across 57 academic subjects including STEM, humanities, and social sciences",
                source: "5-shot MMLU accuracy as reported in the vendor's technical report, normalized to a percentage.",
            },
            Metric {
                key: "perf-humaneval",
                title: "HumanEval Code Score",
                value: format!("{}%", model.human_eval),
                unit: None,
                description: "Measures ability to generate functionally correct Python code from docstrings",
                source: "pass@1 on the 164 HumanEval problems, taken from the vendor's published evaluation.",
            },
            Metric {
                key: "perf-context",
                title: "Max Context Window",
                value: format_tokens(model.context_tokens),
                unit: Some("Tokens"),
                description: "Maximum number of tokens (roughly words) the model can process in a single request",
                source: "Documented maximum input window of the generally available API or release.",
            },
        ],
        MetricTab::Safety => vec![
            Metric {
                key: "safety-refusal",
                title: "Harmful Request Refusal Rate",
                value: format!("{}%", model.safety.refusal_rate),
                unit: None,
                description: "Percentage of harmful, unethical, or inappropriate requests that the model correctly refuses to answer",
                source: "Share of refusals on a fixed red-team prompt set; higher is better.",
            },
            Metric {
                key: "safety-jailbreak",
                title: "Jailbreak Resistance",
                value: format!("{}%", model.safety.jailbreak_resistance),
                unit: None,
                description: "Lower is better. Percentage of adversarial attacks that successfully bypassed safety guardrails",
                source: "Attack success rate across the adversarial suite; lower is better.",
            },
        ],
        MetricTab::Governance => vec![
            Metric {
                key: "gov-audit",
                title: "Third-Party Safety Audit",
                value: model.governance.audit_status.clone(),
                unit: Some("Status"),
                description: "Whether the model has undergone independent third-party safety evaluation",
                source: "Public audit disclosures and system cards from the model provider.",
            },
            Metric {
                key: "gov-frequency",
                title: "Model Update Cadence",
                value: model.governance.update_frequency.clone(),
                unit: Some("Frequency"),
                description: "How frequently the model receives updates and improvements",
                source: "Release notes and changelog history of the provider.",
            },
        ],
    }
}

/// Resolve the record for a detail path segment.
///
/// A segment that is not a number or names no record falls back to the first
/// catalog record. Returns `None` only for an empty catalog.
pub fn resolve_detail<'a>(catalog: &'a Catalog, segment: &str) -> Option<&'a ModelRecord> {
    let found = segment
        .trim()
        .parse::<ModelId>()
        .ok()
        .and_then(|id| catalog.get(id));
    match found {
        Some(model) => Some(model),
        None => {
            tracing::warn!("Unknown model id {:?}, showing first catalog record", segment);
            catalog.first()
        }
    }
}

/// Tags mentioning an audit are highlighted on the detail page
pub fn is_audit_tag(tag: &str) -> bool {
    tag.contains("Audited")
}
