use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::solr::query::MATCH_ALL;

/// Decode a raw query string into its pairs. When a key repeats, the first
/// occurrence wins and later ones are ignored.
fn first_values(raw: Option<&str>) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
        values
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    values
}

/// Query string of `GET /api/search`.
///
/// `start` and `rows` stay strings: they are forwarded to Solr untouched, so a
/// bad value is Solr's to reject, not ours.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub q: String,
    pub category: String,
    pub start: String,
    pub rows: String,
    pub sort: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            q: MATCH_ALL.to_string(),
            category: String::new(),
            start: "0".to_string(),
            rows: "10".to_string(),
            sort: String::new(),
        }
    }
}

impl SearchParams {
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut values = first_values(raw);
        let defaults = Self::default();
        Self {
            q: values.remove("q").unwrap_or(defaults.q),
            category: values.remove("category").unwrap_or(defaults.category),
            start: values.remove("start").unwrap_or(defaults.start),
            rows: values.remove("rows").unwrap_or(defaults.rows),
            sort: values.remove("sort").unwrap_or(defaults.sort),
        }
    }
}

/// Query string of `GET /api/autocomplete`.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteParams {
    pub term: String,
}

impl AutocompleteParams {
    pub fn from_query(raw: Option<&str>) -> Self {
        Self {
            term: first_values(raw).remove("term").unwrap_or_default(),
        }
    }
}

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Category,
    Title,
    Query,
}

/// One autocomplete entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub value: String,
    pub category: SuggestionKind,
}

impl Suggestion {
    pub fn category(name: &str) -> Self {
        Self {
            label: format!("Category: {name}"),
            value: format!("category:{name}"),
            category: SuggestionKind::Category,
        }
    }

    pub fn title(title: &str) -> Self {
        Self {
            label: title.to_string(),
            value: title.to_string(),
            category: SuggestionKind::Title,
        }
    }

    pub fn query(term: &str) -> Self {
        Self {
            label: term.to_string(),
            value: term.to_string(),
            category: SuggestionKind::Query,
        }
    }
}

/// A category facet value with its document count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryFacet {
    pub name: String,
    pub count: u64,
}

impl CategoryFacet {
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
        }
    }
}

/// A schema field offered as a sort option
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// Failure body for endpoints that answer with a bare error object.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure body for `/api/search`: the error plus an empty result set, so the
/// frontend can still read `response.numFound` and `response.docs`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchErrorBody {
    pub error: String,
    pub response: EmptyResultSet,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyResultSet {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    pub docs: Vec<serde_json::Value>,
}

impl SearchErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            response: EmptyResultSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_kind_serializes_lowercase() {
        let json = serde_json::to_value(SuggestionKind::Category).unwrap();
        assert_eq!(json, "category");
        let json = serde_json::to_value(SuggestionKind::Query).unwrap();
        assert_eq!(json, "query");
    }

    #[test]
    fn test_category_suggestion_shape() {
        let json = serde_json::to_value(Suggestion::category("Java")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label": "Category: Java",
                "value": "category:Java",
                "category": "category"
            })
        );
    }

    #[test]
    fn test_schema_field_uses_type_key() {
        let field = SchemaField {
            name: "price".to_string(),
            field_type: "pfloat".to_string(),
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json, serde_json::json!({"name": "price", "type": "pfloat"}));
    }

    #[test]
    fn test_search_error_body_carries_empty_result_set() {
        let json = serde_json::to_value(SearchErrorBody::new("boom")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "boom", "response": {"numFound": 0, "docs": []}})
        );
    }

    #[test]
    fn test_search_params_defaults() {
        let params = SearchParams::from_query(None);
        assert_eq!(params.q, "*:*");
        assert_eq!(params.start, "0");
        assert_eq!(params.rows, "10");
        assert!(params.category.is_empty());
        assert!(params.sort.is_empty());
    }

    #[test]
    fn test_repeated_key_keeps_first_value() {
        let params = SearchParams::from_query(Some("q=dune&q=java&rows=5&rows=50"));
        assert_eq!(params.q, "dune");
        assert_eq!(params.rows, "5");
        assert_eq!(params.start, "0");

        let params = AutocompleteParams::from_query(Some("term=ja&term=jav"));
        assert_eq!(params.term, "ja");
    }

    #[test]
    fn test_query_values_are_percent_decoded() {
        let params = SearchParams::from_query(Some("category=Science%20Fiction&sort=year+desc"));
        assert_eq!(params.category, "Science Fiction");
        assert_eq!(params.sort, "year desc");
    }

    #[test]
    fn test_empty_q_is_kept_for_blank_handling() {
        let params = SearchParams::from_query(Some("q="));
        assert_eq!(params.q, "");
    }
}
