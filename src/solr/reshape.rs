//! Reshaping of Solr JSON into the frontend's shapes.

use std::collections::HashSet;

use serde_json::Value;

use crate::models::{CategoryFacet, SchemaField, Suggestion};

/// Placeholder facet shown when Solr reports no categories at all.
pub const ALL_CATEGORIES: &str = "All Categories";

/// Field type of analyzed free text; not sortable, so never offered.
pub const FREE_TEXT_TYPE: &str = "text_general";

/// Read a string-valued document field. Multi-valued fields arrive as arrays;
/// their first string element stands in for the whole field.
fn doc_str<'a>(doc: &'a Value, field: &str) -> Option<&'a str> {
    match doc.get(field)? {
        Value::String(s) => Some(s.as_str()),
        Value::Array(values) => values.first().and_then(Value::as_str),
        _ => None,
    }
}

/// `response.docs` of a `/select` payload, or nothing.
pub fn response_docs(data: &Value) -> &[Value] {
    data.pointer("/response/docs")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Build autocomplete suggestions for `term` from the returned documents.
///
/// Exact (case-insensitive) category matches come first, then titles, each in
/// document order and deduplicated by value. The literal term is appended
/// last unless some suggestion already has it as its value.
pub fn build_suggestions(term: &str, docs: &[Value]) -> Vec<Suggestion> {
    let term_lower = term.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut suggestions = Vec::new();

    for doc in docs {
        let Some(category) = doc_str(doc, "category") else {
            continue;
        };
        if category.to_lowercase() != term_lower {
            continue;
        }
        let suggestion = Suggestion::category(category);
        if seen.insert(suggestion.value.clone()) {
            suggestions.push(suggestion);
        }
    }

    for doc in docs {
        if let Some(title) = doc_str(doc, "title") {
            if seen.insert(title.to_string()) {
                suggestions.push(Suggestion::title(title));
            }
        }
    }

    if !suggestions.iter().any(|s| s.value == term) {
        suggestions.push(Suggestion::query(term));
    }

    suggestions
}

/// Decode Solr's flat `[term, count, term, count, ...]` facet list.
///
/// Only pairs of (string, positive integer) survive; a trailing term without
/// a count is dropped. Never returns an empty list.
pub fn decode_facets(data: &Value) -> Vec<CategoryFacet> {
    let flat = data
        .pointer("/facet_counts/facet_fields/category")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut facets: Vec<CategoryFacet> = flat
        .chunks_exact(2)
        .filter_map(|pair| {
            let name = pair[0].as_str()?;
            let count = pair[1].as_u64()?;
            (count > 0).then(|| CategoryFacet {
                name: name.to_string(),
                count,
            })
        })
        .collect();

    if facets.is_empty() {
        facets.push(CategoryFacet::placeholder(ALL_CATEGORIES));
    }
    facets
}

/// Stored, non-free-text fields from a `/schema/fields` payload.
pub fn sortable_fields(data: &Value) -> Vec<SchemaField> {
    let Some(fields) = data.get("fields").and_then(Value::as_array) else {
        return Vec::new();
    };

    fields
        .iter()
        .filter(|f| f.get("stored").and_then(Value::as_bool).unwrap_or(false))
        .filter_map(|f| {
            let name = f.get("name")?.as_str()?;
            let field_type = f.get("type")?.as_str()?;
            (field_type != FREE_TEXT_TYPE).then(|| SchemaField {
                name: name.to_string(),
                field_type: field_type.to_string(),
            })
        })
        .collect()
}
