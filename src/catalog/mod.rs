//! Model catalog
//!
//! The fixed, read-only collection of model records every view reads from.
//! The data ships embedded in the binary and is parsed and validated once per
//! process on first access.

use crate::types::{ModelId, ModelRecord};
use crate::types::model::context_label;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("models.json");

static CATALOG: Lazy<Catalog> = Lazy::new(|| match Catalog::embedded() {
    Ok(catalog) => {
        tracing::info!("Loaded model catalog with {} records", catalog.len());
        catalog
    }
    Err(e) => {
        tracing::error!("Embedded model catalog is invalid: {}", e);
        Catalog::default()
    }
});

/// Process-wide catalog, loaded on first use and never mutated afterwards
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog contains no models")]
    Empty,
    #[error("Model id must be positive (model \"{0}\")")]
    InvalidId(String),
    #[error("Duplicate model id: {0}")]
    DuplicateId(ModelId),
    #[error("Model {id}: {field} = {value} is outside 0-100")]
    ScoreOutOfRange {
        id: ModelId,
        field: &'static str,
        value: f64,
    },
    #[error("Model {0}: context window must be positive")]
    InvalidContext(ModelId),
    #[error("Model {id}: context label \"{label}\" does not match {expected}")]
    ContextLabelMismatch {
        id: ModelId,
        label: String,
        expected: String,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    models: Vec<ModelRecord>,
}

/// Ordered, validated model collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    models: Vec<ModelRecord>,
}

impl Catalog {
    /// Build a catalog from records, checking every record invariant
    pub fn new(models: Vec<ModelRecord>) -> Result<Self, CatalogError> {
        validate(&models)?;
        Ok(Self { models })
    }

    /// Parse a catalog document of the form `{"models": [...]}`
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.models)
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn models(&self) -> &[ModelRecord] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn get(&self, id: ModelId) -> Option<&ModelRecord> {
        self.models.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: ModelId) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&ModelRecord> {
        self.models.first()
    }

    /// Distinct company names in catalog order
    pub fn companies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.models
            .iter()
            .map(|m| m.company.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Look up a list of ids.
    ///
    /// Unknown ids are dropped and duplicates collapse. The result follows
    /// catalog order, not the order of `ids`.
    pub fn resolve(&self, ids: &[ModelId]) -> Vec<&ModelRecord> {
        let wanted: HashSet<ModelId> = ids.iter().copied().collect();
        let resolved: Vec<&ModelRecord> = self
            .models
            .iter()
            .filter(|m| wanted.contains(&m.id))
            .collect();
        if resolved.len() < wanted.len() {
            tracing::debug!(
                "Dropped {} unknown model id(s) while resolving",
                wanted.len() - resolved.len()
            );
        }
        resolved
    }

    /// Distinct ids from `ids` that name no record, in first-seen order
    pub fn unknown_ids(&self, ids: &[ModelId]) -> Vec<ModelId> {
        let mut seen = HashSet::new();
        ids.iter()
            .copied()
            .filter(|id| seen.insert(*id) && !self.contains(*id))
            .collect()
    }
}

fn validate(models: &[ModelRecord]) -> Result<(), CatalogError> {
    if models.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut ids = HashSet::new();
    for model in models {
        if model.id == 0 {
            return Err(CatalogError::InvalidId(model.name.clone()));
        }
        if !ids.insert(model.id) {
            return Err(CatalogError::DuplicateId(model.id));
        }

        let scores = [
            ("mmlu", model.mmlu),
            ("humanEval", model.human_eval),
            ("safety.refusalRate", model.safety.refusal_rate),
            ("safety.jailbreakResistance", model.safety.jailbreak_resistance),
            ("radarScores.safety", model.radar_scores.safety),
            ("radarScores.governance", model.radar_scores.governance),
            ("radarScores.performance", model.radar_scores.performance),
        ];
        for (field, value) in scores {
            if !(0.0..=100.0).contains(&value) {
                return Err(CatalogError::ScoreOutOfRange {
                    id: model.id,
                    field,
                    value,
                });
            }
        }

        if model.context_tokens == 0 {
            return Err(CatalogError::InvalidContext(model.id));
        }
        let expected = context_label(model.context_tokens);
        if model.context_label != expected {
            return Err(CatalogError::ContextLabelMismatch {
                id: model.id,
                label: model.context_label.clone(),
                expected,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::model::{GovernanceInfo, RadarScores, SafetyMetrics};
    use crate::types::ModelType;

    pub(crate) fn record(id: ModelId, name: &str, company: &str) -> ModelRecord {
        ModelRecord {
            id,
            name: name.to_string(),
            company: company.to_string(),
            color: "#FFFFFF".to_string(),
            model_type: ModelType::ClosedApi,
            mmlu: 80.0,
            human_eval: 70.0,
            context_tokens: 128_000,
            context_label: "128k".to_string(),
            audited: false,
            safety: SafetyMetrics {
                refusal_rate: 90.0,
                jailbreak_resistance: 5.0,
            },
            governance: GovernanceInfo {
                audit_status: "None".to_string(),
                update_frequency: "Unknown".to_string(),
            },
            radar_scores: RadarScores {
                safety: 50.0,
                governance: 50.0,
                performance: 50.0,
            },
            description: String::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = Catalog::embedded().expect("embedded catalog should validate");
        assert_eq!(catalog.len(), 6);
        let ids: Vec<ModelId> = catalog.models().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(catalog.get(3).map(|m| m.context_label.as_str()), Some("1M"));
    }

    #[test]
    fn test_global_catalog_matches_embedded() {
        assert_eq!(catalog().len(), Catalog::embedded().unwrap().len());
        assert_eq!(catalog().first().map(|m| m.id), Some(1));
    }

    #[test]
    fn test_companies_are_distinct_and_ordered() {
        let catalog = Catalog::new(vec![
            record(1, "A", "OpenAI"),
            record(2, "B", "Meta"),
            record(3, "C", "OpenAI"),
        ])
        .unwrap();
        assert_eq!(catalog.companies(), vec!["OpenAI", "Meta"]);
    }

    #[test]
    fn test_resolve_drops_unknown_and_duplicates() {
        let catalog = Catalog::embedded().unwrap();
        let resolved = catalog.resolve(&[4, 1, 99, 4]);
        let ids: Vec<ModelId> = resolved.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(catalog.resolve(&[]).is_empty());
    }

    #[test]
    fn test_unknown_ids_ignore_duplicates() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.unknown_ids(&[1, 2, 2]).is_empty());
        assert_eq!(catalog.unknown_ids(&[99, 1, 99, 42]), vec![99, 42]);
        assert!(catalog.unknown_ids(&[]).is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::new(vec![record(1, "A", "X"), record(1, "B", "Y")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_rejects_zero_id() {
        let err = Catalog::new(vec![record(0, "A", "X")]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId(_)));
    }

    #[test]
    fn test_rejects_out_of_range_scores() {
        let mut bad = record(1, "A", "X");
        bad.safety.jailbreak_resistance = 101.0;
        let err = Catalog::new(vec![bad]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ScoreOutOfRange { field: "safety.jailbreakResistance", .. }
        ));
    }

    #[test]
    fn test_rejects_inconsistent_context_label() {
        let mut bad = record(1, "A", "X");
        bad.context_label = "200k".to_string();
        let err = Catalog::new(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::ContextLabelMismatch { id: 1, .. }));
    }

    #[test]
    fn test_accepts_small_context_window() {
        let mut small = record(1, "Tiny", "X");
        small.context_tokens = 512;
        small.context_label = "512".to_string();
        assert!(Catalog::new(vec![small.clone()]).is_ok());

        small.context_label = "0k".to_string();
        assert!(matches!(
            Catalog::new(vec![small]),
            Err(CatalogError::ContextLabelMismatch { id: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
        assert!(matches!(
            Catalog::from_json("{\"models\": []}"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{\"models\": [{}]}"),
            Err(CatalogError::Parse(_))
        ));
    }
}
