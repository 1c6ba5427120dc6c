use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::models::CategoryFacet;
use crate::solr::query::category_facet_params;
use crate::solr::reshape::decode_facets;
use crate::state::AppState;

const ERROR_PLACEHOLDER: &str = "Error loading categories";

/// GET /api/categories - Category facet values with document counts.
///
/// Always a renderable list: failures answer 500 with a single placeholder
/// facet so the frontend dropdown still has something to show. A non-2xx
/// status from Solr is one of those failures, not an empty facet list.
pub async fn categories(
    State(state): State<AppState>,
) -> (StatusCode, Json<Vec<CategoryFacet>>) {
    match state.solr.select(&category_facet_params()).await {
        Ok(data) => {
            tracing::debug!("Categories response: {data}");
            (StatusCode::OK, Json(decode_facets(&data)))
        }
        Err(e) => {
            tracing::error!("Error in categories API: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(vec![CategoryFacet::placeholder(ERROR_PLACEHOLDER)]),
            )
        }
    }
}
