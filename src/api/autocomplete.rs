use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::Json;

use crate::models::{AutocompleteParams, ErrorBody, Suggestion};
use crate::solr::query::autocomplete_params;
use crate::solr::reshape::{build_suggestions, response_docs};
use crate::state::AppState;

/// GET /api/autocomplete - Prefix suggestions for the search box.
///
/// A blank term answers `[]` without touching Solr. Upstream failures are
/// reported as an error object, not an empty list.
///
/// Any non-2xx status from Solr counts as a failure here, so a Solr 4xx
/// answers 500 `{error}` rather than a list holding only the term.
pub async fn autocomplete(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Vec<Suggestion>>, (StatusCode, Json<ErrorBody>)> {
    let term = AutocompleteParams::from_query(raw.as_deref()).term;
    if term.trim().is_empty() {
        return Ok(Json(Vec::new()));
    }

    let data = state
        .solr
        .select(&autocomplete_params(&term))
        .await
        .map_err(|e| {
            tracing::warn!("Autocomplete for '{term}' failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
        })?;

    Ok(Json(build_suggestions(&term, response_docs(&data))))
}
