use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::models::{SearchErrorBody, SearchParams};
use crate::solr::query::search_params;
use crate::state::AppState;

/// GET /api/search - Boosted full-text search with highlighting.
///
/// The Solr `/select` payload is returned as-is. On any upstream failure the
/// body is still shaped like a result set (`numFound: 0`, no docs). Repeated
/// query keys take their first value instead of being rejected.
pub async fn search(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Value>, (StatusCode, Json<SearchErrorBody>)> {
    let req = SearchParams::from_query(raw.as_deref());
    let params = search_params(&req);

    match state.solr.select(&params).await {
        Ok(data) => Ok(Json(data)),
        Err(e) => {
            tracing::error!("Search failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchErrorBody::new(e.to_string())),
            ))
        }
    }
}
