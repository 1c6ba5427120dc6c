use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::models::{ErrorBody, SchemaField};
use crate::solr::reshape::sortable_fields;
use crate::state::AppState;

/// GET /api/fields - Schema fields usable as sort keys.
///
/// A non-2xx status from Solr is reported as a 500 error object.
pub async fn fields(
    State(state): State<AppState>,
) -> Result<Json<Vec<SchemaField>>, (StatusCode, Json<ErrorBody>)> {
    let data = state.solr.schema_fields().await.map_err(|e| {
        tracing::warn!("Schema field lookup failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(sortable_fields(&data)))
}
