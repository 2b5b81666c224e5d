//! Filter engine
//!
//! Reduces the catalog to the subset visible in the console listing.

use crate::catalog::Catalog;
use crate::types::{ModelRecord, ModelType};
use std::collections::BTreeSet;

/// Upper bound of the min-context slider, in thousands of tokens
pub const MAX_CONTEXT_K: u64 = 1000;
/// Slider step, in thousands of tokens
pub const CONTEXT_STEP_K: u64 = 10;

/// Listing filter state.
///
/// Empty `companies` or `types` means no restriction on that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub companies: BTreeSet<String>,
    pub types: BTreeSet<ModelType>,
    /// Inclusive lower bound on the raw context window, in tokens
    pub min_context: u64,
}

impl FilterCriteria {
    pub fn with_min_context_k(min_context_k: u64) -> Self {
        let mut criteria = Self::default();
        criteria.set_min_context_k(min_context_k);
        criteria
    }

    pub fn toggle_company(&mut self, company: &str) {
        if !self.companies.remove(company) {
            self.companies.insert(company.to_string());
        }
    }

    pub fn toggle_type(&mut self, model_type: ModelType) {
        if !self.types.remove(&model_type) {
            self.types.insert(model_type);
        }
    }

    /// Slider value in thousands of tokens
    pub fn min_context_k(&self) -> u64 {
        self.min_context / 1000
    }

    pub fn set_min_context_k(&mut self, k: u64) {
        self.min_context = k.min(MAX_CONTEXT_K) * 1000;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches_search(&self, model: &ModelRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        model.name.to_lowercase().contains(&needle) || model.company.to_lowercase().contains(&needle)
    }

    pub fn matches_company(&self, model: &ModelRecord) -> bool {
        self.companies.is_empty() || self.companies.contains(&model.company)
    }

    pub fn matches_type(&self, model: &ModelRecord) -> bool {
        self.types.is_empty() || self.types.contains(&model.model_type)
    }

    pub fn matches_context(&self, model: &ModelRecord) -> bool {
        model.context_tokens >= self.min_context
    }

    pub fn matches(&self, model: &ModelRecord) -> bool {
        self.matches_search(model)
            && self.matches_company(model)
            && self.matches_type(model)
            && self.matches_context(model)
    }
}

/// Records passing every predicate, in catalog order
pub fn filter<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a ModelRecord> {
    catalog
        .models()
        .iter()
        .filter(|m| criteria.matches(m))
        .collect()
}
