//! Application routes
//!
//! Locations are plain strings (`/console/compare?ids=1,3`); parameters are
//! parsed here and nowhere else.

use crate::console::selection::{parse_ids, serialize_ids};
use crate::types::ModelId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Landing page
    #[default]
    Home,
    /// Model listing with filters and selection
    Console,
    /// Side-by-side comparison of the given ids
    Compare { ids: Vec<ModelId> },
    /// Detail page; the raw path segment is kept so an unparsable id can
    /// still fall back to the first record
    ModelDetail { id: String },
    /// Evaluation policy setup
    Evaluate,
}

impl Route {
    pub fn compare(ids: impl IntoIterator<Item = ModelId>) -> Self {
        Route::Compare {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn model(id: ModelId) -> Self {
        Route::ModelDetail { id: id.to_string() }
    }

    /// Parse a location into a route; unknown paths land on `Home`
    pub fn parse(location: &str) -> Self {
        let location = location.split('#').next().unwrap_or_default();
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["console"] => Route::Console,
            ["console", "compare"] => Route::Compare {
                ids: query
                    .and_then(|q| query_param(q, "ids"))
                    .map(|raw| parse_ids(&raw))
                    .unwrap_or_default(),
            },
            ["console", "evaluate"] => Route::Evaluate,
            ["console", "model", id] => Route::ModelDetail { id: id.to_string() },
            _ => {
                tracing::debug!("Unknown location {:?}, routing to home", location);
                Route::Home
            }
        }
    }
}

/// Percent-decoded value of `key`; a value that does not decode to UTF-8 is
/// treated as absent
fn query_param(query: &str, key: &str) -> Option<String> {
    let (_, raw) = query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)?;
    match urlencoding::decode(&raw.replace('+', " ")) {
        Ok(value) => Some(value.into_owned()),
        Err(e) => {
            tracing::warn!("Ignoring undecodable query parameter {}={:?}: {}", key, raw, e);
            None
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Console => f.write_str("/console"),
            Route::Compare { ids } if ids.is_empty() => f.write_str("/console/compare"),
            Route::Compare { ids } => {
                write!(f, "/console/compare?ids={}", serialize_ids(ids.iter().copied()))
            }
            Route::ModelDetail { id } => write!(f, "/console/model/{}", id),
            Route::Evaluate => f.write_str("/console/evaluate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/console"), Route::Console);
        assert_eq!(Route::parse("/console/"), Route::Console);
        assert_eq!(Route::parse("/console/evaluate"), Route::Evaluate);
        assert_eq!(Route::parse("/nowhere"), Route::Home);
    }

    #[test]
    fn test_parse_compare_ids() {
        assert_eq!(Route::parse("/console/compare?ids=1,3,4"), Route::compare([1, 3, 4]));
        assert_eq!(Route::parse("/console/compare?ids=1%2C2"), Route::compare([1, 2]));
        assert_eq!(Route::parse("/console/compare?x=1&ids=2,oops"), Route::compare([2]));
        assert_eq!(Route::parse("/console/compare"), Route::compare([]));
        assert_eq!(Route::parse("/console/compare?ids="), Route::compare([]));
    }

    #[test]
    fn test_parse_model_detail() {
        assert_eq!(Route::parse("/console/model/4"), Route::model(4));
        assert_eq!(
            Route::parse("/console/model/abc"),
            Route::ModelDetail { id: "abc".to_string() }
        );
    }

    #[test]
    fn test_display_round_trips() {
        for route in [
            Route::Home,
            Route::Console,
            Route::Evaluate,
            Route::compare([1, 2, 5]),
            Route::compare([]),
            Route::model(3),
        ] {
            assert_eq!(Route::parse(&route.to_string()), route);
        }
        assert_eq!(Route::compare([1, 3]).to_string(), "/console/compare?ids=1,3");
    }

    #[test]
    fn test_parse_decodes_query_escapes() {
        assert_eq!(Route::parse("/console/compare?ids=1,%202"), Route::compare([1, 2]));
        assert_eq!(Route::parse("/console/compare?ids=1%2c+3"), Route::compare([1, 3]));
        assert_eq!(Route::parse("/console/compare?ids=%FF,1"), Route::compare([]));
    }

    #[test]
    fn test_compare_selection_survives_location_string() {
        use crate::catalog::Catalog;
        use crate::console::{CompareAction, ComparisonData, SelectionSet};

        let catalog = Catalog::embedded().unwrap();
        let selection: SelectionSet = [6, 2, 4].into_iter().collect();
        let CompareAction::Enabled { ids } = CompareAction::for_selection(&selection, &catalog) else {
            panic!("three known ids should enable compare");
        };
        let location = Route::compare(ids.clone()).to_string();
        assert_eq!(location, "/console/compare?ids=2,4,6");

        let Route::Compare { ids: parsed } = Route::parse(&location) else {
            panic!("{} should parse as a compare route", location);
        };
        assert_eq!(parsed, ids);
        assert_eq!(
            ComparisonData::build(&catalog, &parsed),
            ComparisonData::build(&catalog, &ids)
        );
    }
}
