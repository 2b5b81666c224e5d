//! Comparison selection
//!
//! The set of models picked for side-by-side comparison and its transfer
//! encoding (`1,3,4`) used in the comparison route's query string.

use crate::catalog::Catalog;
use crate::types::{ModelId, ModelRecord};
use std::collections::BTreeSet;

/// Minimum number of distinct resolvable models needed to compare
pub const MIN_COMPARE: usize = 2;

/// Tooltip shown on the inert compare action
pub const COMPARE_DISABLED_HINT: &str = "Select at least 2 models to compare";

/// Ids marked for comparison
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<ModelId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present
    pub fn toggle(&mut self, id: ModelId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn remove(&mut self, id: ModelId) {
        self.ids.remove(&id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: ModelId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ModelId> + '_ {
        self.ids.iter().copied()
    }

    /// Comma-joined decimal ids, e.g. `1,3,4`
    pub fn serialize(&self) -> String {
        serialize_ids(self.ids())
    }

    /// Selected records in catalog order
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ModelRecord> {
        let ids: Vec<ModelId> = self.ids().collect();
        catalog.resolve(&ids)
    }
}

impl FromIterator<ModelId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ModelId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

pub fn serialize_ids(ids: impl IntoIterator<Item = ModelId>) -> String {
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Split on commas and keep every token that parses as an id.
///
/// Malformed tokens are skipped. Catalog membership is checked later by
/// [`Catalog::resolve`].
pub fn parse_ids(raw: &str) -> Vec<ModelId> {
    raw.split(',')
        .filter_map(|token| token.trim().parse::<ModelId>().ok())
        .collect()
}

/// Whether the ids resolve to enough distinct models to compare
pub fn can_compare(catalog: &Catalog, ids: &[ModelId]) -> bool {
    catalog.resolve(ids).len() >= MIN_COMPARE
}

/// State of the comparison bar's compare button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareAction {
    /// Navigates to the comparison view with these ids
    Enabled { ids: Vec<ModelId> },
    /// Rendered but inert
    Disabled { hint: &'static str },
}

impl CompareAction {
    pub fn for_selection(selection: &SelectionSet, catalog: &Catalog) -> Self {
        let ids: Vec<ModelId> = selection.ids().collect();
        if can_compare(catalog, &ids) {
            let resolved = catalog.resolve(&ids).iter().map(|m| m.id).collect();
            CompareAction::Enabled { ids: resolved }
        } else {
            CompareAction::Disabled {
                hint: COMPARE_DISABLED_HINT,
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, CompareAction::Enabled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        let mut set: SelectionSet = [1, 4].into_iter().collect();
        let original = set.clone();
        for id in [1, 2, 4, 6, 99] {
            set.toggle(id);
            set.toggle(id);
            assert_eq!(set, original);
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = SelectionSet::new();
        set.toggle(3);
        assert!(set.contains(3));
        assert_eq!(set.len(), 1);
        set.toggle(3);
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut set: SelectionSet = [1, 2, 3].into_iter().collect();
        set.remove(2);
        set.remove(42);
        assert_eq!(set.ids().collect::<Vec<_>>(), vec![1, 3]);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_serialize() {
        let set: SelectionSet = [4, 1, 3].into_iter().collect();
        assert_eq!(set.serialize(), "1,3,4");
        assert_eq!(SelectionSet::new().serialize(), "");
    }

    #[test]
    fn test_parse_discards_malformed_tokens() {
        assert_eq!(parse_ids("1, 3,abc,,-2,4"), vec![1, 3, 4]);
        assert!(parse_ids("").is_empty());
    }

    #[test]
    fn test_round_trip_ignores_order_and_unknown_ids() {
        let catalog = Catalog::embedded().unwrap();
        let set: SelectionSet = [5, 2, 999].into_iter().collect();
        let parsed = catalog.resolve(&parse_ids(&set.serialize()));
        assert_eq!(parsed, set.resolve(&catalog));
        assert_eq!(parsed.iter().map(|m| m.id).collect::<Vec<_>>(), vec![2, 5]);

        let reordered = catalog.resolve(&parse_ids("5,2,2,x"));
        assert_eq!(reordered, parsed);
    }

    #[test]
    fn test_compare_enablement() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!can_compare(&catalog, &[1]));
        assert!(can_compare(&catalog, &[1, 2]));
        assert!(can_compare(&catalog, &parse_ids("1,2,2")));
        assert!(!can_compare(&catalog, &parse_ids("1,1")));
        assert!(!can_compare(&catalog, &[1, 999]));
    }

    #[test]
    fn test_compare_action_for_selection() {
        let catalog = Catalog::embedded().unwrap();
        let mut set = SelectionSet::new();
        set.toggle(1);
        assert_eq!(
            CompareAction::for_selection(&set, &catalog),
            CompareAction::Disabled {
                hint: COMPARE_DISABLED_HINT
            }
        );
        set.toggle(2);
        let action = CompareAction::for_selection(&set, &catalog);
        assert!(action.is_enabled());
        assert_eq!(action, CompareAction::Enabled { ids: vec![1, 2] });
    }

    #[test]
    fn test_unknown_ids_do_not_enable_compare() {
        let catalog = Catalog::embedded().unwrap();
        let set: SelectionSet = [3, 999].into_iter().collect();
        assert!(!CompareAction::for_selection(&set, &catalog).is_enabled());

        let set: SelectionSet = [999, 3, 1].into_iter().collect();
        assert_eq!(
            CompareAction::for_selection(&set, &catalog),
            CompareAction::Enabled { ids: vec![1, 3] }
        );
    }
}
