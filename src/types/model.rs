//! Model types
//!
//! Defines the model metadata records shown across the console.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity key of a catalog record
pub type ModelId = u32;

/// Distribution type of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModelType {
    /// Accessible only through a hosted API
    #[serde(rename = "Closed API")]
    ClosedApi,
    /// Weights are published
    #[serde(rename = "Open-weight")]
    OpenWeight,
    /// Both hosted and open variants exist
    #[serde(rename = "Mixed")]
    Mixed,
}

impl ModelType {
    pub const ALL: [ModelType; 3] = [ModelType::ClosedApi, ModelType::OpenWeight, ModelType::Mixed];

    pub fn label(self) -> &'static str {
        match self {
            ModelType::ClosedApi => "Closed API",
            ModelType::OpenWeight => "Open-weight",
            ModelType::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Safety evaluation results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyMetrics {
    /// Share of harmful requests correctly refused (higher is better)
    pub refusal_rate: f64,
    /// Share of adversarial attacks that got through (lower is better)
    pub jailbreak_resistance: f64,
}

/// Governance and audit information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceInfo {
    pub audit_status: String,
    pub update_frequency: String,
}

/// Normalized 0-100 axes used by the radar comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarScores {
    pub safety: f64,
    pub governance: f64,
    pub performance: f64,
}

/// A single model in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    pub id: ModelId,
    pub name: String,
    pub company: String,
    /// Series color shared by every chart this model appears in
    pub color: String,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    pub mmlu: f64,
    pub human_eval: f64,
    /// Raw context window in tokens
    pub context_tokens: u64,
    /// Display form of `context_tokens`, e.g. "128k"
    pub context_label: String,
    pub audited: bool,
    pub safety: SafetyMetrics,
    pub governance: GovernanceInfo,
    pub radar_scores: RadarScores,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Derive the short display label for a token count.
///
/// Whole millions render as `"1M"`, counts under a thousand as the plain
/// number (`"512"`), everything else in thousands (`"128k"`).
pub fn context_label(tokens: u64) -> String {
    if tokens < 1000 {
        tokens.to_string()
    } else if tokens % 1_000_000 == 0 {
        format!("{}M", tokens / 1_000_000)
    } else {
        format!("{}k", tokens / 1000)
    }
}

/// Format a token count with thousands separators, e.g. `128,000`
pub fn format_tokens(tokens: u64) -> String {
    let digits = tokens.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_label() {
        assert_eq!(context_label(128_000), "128k");
        assert_eq!(context_label(32_000), "32k");
        assert_eq!(context_label(1_000_000), "1M");
        assert_eq!(context_label(2_000_000), "2M");
        assert_eq!(context_label(1_500_000), "1500k");
    }

    #[test]
    fn test_context_label_below_one_thousand() {
        assert_eq!(context_label(512), "512");
        assert_eq!(context_label(999), "999");
        assert_eq!(context_label(1000), "1k");
    }

    #[test]
    fn test_format_tokens() {
        assert_eq!(format_tokens(0), "0");
        assert_eq!(format_tokens(999), "999");
        assert_eq!(format_tokens(128_000), "128,000");
        assert_eq!(format_tokens(1_000_000), "1,000,000");
    }

    #[test]
    fn test_model_type_serde_labels() {
        let json = serde_json::to_string(&ModelType::OpenWeight).unwrap();
        assert_eq!(json, "\"Open-weight\"");
        let parsed: ModelType = serde_json::from_str("\"Closed API\"").unwrap();
        assert_eq!(parsed, ModelType::ClosedApi);
        assert_eq!(ModelType::Mixed.to_string(), "Mixed");
    }
}
