//! Translation of frontend requests into Solr `/select` parameters.

use crate::models::SearchParams;

/// Solr's match-everything query.
pub const MATCH_ALL: &str = "*:*";

/// Generic catch-all full-text field in the default Solr schema.
pub const FULL_TEXT_FIELD: &str = "_text_";

/// Fields highlighted on search results.
pub const HIGHLIGHT_FIELDS: &str = "title,category,author";
pub const HIGHLIGHT_SNIPPETS: u32 = 3;
pub const HIGHLIGHT_FRAGSIZE: u32 = 200;

pub const AUTOCOMPLETE_ROWS: u32 = 8;
pub const AUTOCOMPLETE_FIELDS: &str = "title,category,id";

pub const CATEGORY_FACET_FIELD: &str = "category";
pub const CATEGORY_FACET_LIMIT: u32 = 30;
pub const CATEGORY_FACET_MINCOUNT: u32 = 1;

/// Field boosts applied to a bare search term, highest first.
const SEARCH_BOOSTS: [(&str, u32); 4] = [
    ("title", 10),
    ("category", 8),
    ("author", 5),
    (FULL_TEXT_FIELD, 2),
];

/// Ordered Solr query parameters. Keys are unique; values are sent verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolrParams {
    pairs: Vec<(String, String)>,
}

impl SolrParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an earlier value in place so the order is stable.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Expand a bare term into the boosted multi-field disjunction. Anything that
/// already contains a `:` is native Solr syntax and passes through untouched.
pub fn expand_query(query: &str) -> String {
    if query.contains(':') {
        return query.to_string();
    }
    SEARCH_BOOSTS
        .iter()
        .map(|(field, boost)| format!("{field}:({query})^{boost}"))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// The query actually sent for a search: blank becomes match-all, then expansion.
pub fn effective_query(query: &str) -> String {
    if query.trim().is_empty() {
        return MATCH_ALL.to_string();
    }
    expand_query(query)
}

pub fn search_params(req: &SearchParams) -> SolrParams {
    let mut params = SolrParams::new();
    params
        .insert("q", effective_query(&req.q))
        .insert("start", &req.start)
        .insert("rows", &req.rows)
        .insert("wt", "json")
        .insert("hl", "true")
        .insert("hl.fl", HIGHLIGHT_FIELDS)
        .insert("hl.snippets", HIGHLIGHT_SNIPPETS)
        .insert("hl.fragsize", HIGHLIGHT_FRAGSIZE);

    if !req.category.is_empty() {
        params.insert("fq", format!("{CATEGORY_FACET_FIELD}:{}", req.category));
    }
    if !req.sort.is_empty() {
        params.insert("sort", &req.sort);
    }
    params
}

/// Prefix query for autocomplete. Callers must reject blank terms first.
pub fn autocomplete_params(term: &str) -> SolrParams {
    let mut params = SolrParams::new();
    params
        .insert(
            "q",
            format!("title:({term}*)^10 OR content:({term}*)^5 OR category:({term}*)^8"),
        )
        .insert("fl", AUTOCOMPLETE_FIELDS)
        .insert("rows", AUTOCOMPLETE_ROWS)
        .insert("wt", "json");
    params
}

/// Zero-row facet query listing category values.
pub fn category_facet_params() -> SolrParams {
    let mut params = SolrParams::new();
    params
        .insert("q", MATCH_ALL)
        .insert("facet", "true")
        .insert("facet.field", CATEGORY_FACET_FIELD)
        .insert("facet.limit", CATEGORY_FACET_LIMIT)
        .insert("facet.mincount", CATEGORY_FACET_MINCOUNT)
        .insert("rows", 0)
        .insert("wt", "json");
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(q: &str) -> SearchParams {
        SearchParams {
            q: q.to_string(),
            ..SearchParams::default()
        }
    }

    #[test]
    fn test_blank_query_becomes_match_all() {
        for q in ["", " ", "\t\n  "] {
            assert_eq!(effective_query(q), MATCH_ALL);
            assert_eq!(search_params(&search(q)).get("q"), Some(MATCH_ALL));
        }
    }

    #[test]
    fn test_field_qualified_query_passes_through() {
        assert_eq!(effective_query("category:java"), "category:java");
        assert_eq!(effective_query("title:\"rust book\""), "title:\"rust book\"");
    }

    #[test]
    fn test_bare_term_expands_to_four_boosted_clauses() {
        assert_eq!(
            expand_query("rust"),
            "title:(rust)^10 OR category:(rust)^8 OR author:(rust)^5 OR _text_:(rust)^2"
        );
    }

    #[test]
    fn test_multi_word_term_is_wrapped_not_split() {
        let q = expand_query("war and peace");
        assert!(q.starts_with("title:(war and peace)^10 OR "));
        assert_eq!(q.matches(" OR ").count(), 3);
    }

    #[test]
    fn test_search_params_fixed_highlighting() {
        let params = search_params(&search("rust"));
        assert_eq!(params.get("wt"), Some("json"));
        assert_eq!(params.get("hl"), Some("true"));
        assert_eq!(params.get("hl.fl"), Some("title,category,author"));
        assert_eq!(params.get("hl.snippets"), Some("3"));
        assert_eq!(params.get("hl.fragsize"), Some("200"));
        assert_eq!(params.get("fq"), None);
        assert_eq!(params.get("sort"), None);
    }

    #[test]
    fn test_search_params_order() {
        let req = SearchParams {
            category: "Fiction".to_string(),
            sort: "price asc".to_string(),
            ..search("dune")
        };
        let params = search_params(&req);
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            ["q", "start", "rows", "wt", "hl", "hl.fl", "hl.snippets", "hl.fragsize", "fq", "sort"]
        );
    }

    #[test]
    fn test_category_filter_and_sort_forwarded() {
        let req = SearchParams {
            category: "Science Fiction".to_string(),
            sort: "year desc".to_string(),
            ..search("dune")
        };
        let params = search_params(&req);
        assert_eq!(params.get("fq"), Some("category:Science Fiction"));
        assert_eq!(params.get("sort"), Some("year desc"));
    }

    #[test]
    fn test_start_and_rows_not_clamped() {
        let req = SearchParams {
            start: "-5".to_string(),
            rows: "lots".to_string(),
            ..search("dune")
        };
        let params = search_params(&req);
        assert_eq!(params.get("start"), Some("-5"));
        assert_eq!(params.get("rows"), Some("lots"));
    }

    #[test]
    fn test_start_and_rows_survive_url_encoding() {
        let req = SearchParams {
            start: "20".to_string(),
            rows: "-1".to_string(),
            ..search("dune")
        };
        let params = search_params(&req);
        let request = reqwest::Client::new()
            .get("http://localhost:8983/solr/c/select")
            .query(params.as_pairs())
            .build()
            .unwrap();
        let decoded: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(decoded.as_slice(), params.as_pairs());
    }

    #[test]
    fn test_autocomplete_params() {
        let params = autocomplete_params("jav");
        assert_eq!(
            params.get("q"),
            Some("title:(jav*)^10 OR content:(jav*)^5 OR category:(jav*)^8")
        );
        assert_eq!(params.get("fl"), Some("title,category,id"));
        assert_eq!(params.get("rows"), Some("8"));
        assert_eq!(params.get("wt"), Some("json"));
        assert_eq!(params.iter().count(), 4);
    }

    #[test]
    fn test_category_facet_params() {
        let params = category_facet_params();
        assert_eq!(params.get("q"), Some("*:*"));
        assert_eq!(params.get("facet"), Some("true"));
        assert_eq!(params.get("facet.field"), Some("category"));
        assert_eq!(params.get("facet.limit"), Some("30"));
        assert_eq!(params.get("facet.mincount"), Some("1"));
        assert_eq!(params.get("rows"), Some("0"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = SolrParams::new();
        params.insert("q", "a").insert("rows", 1).insert("q", "b");
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(pairs, [("q", "b"), ("rows", "1")]);
    }
}
