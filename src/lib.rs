//! # solr-gateway
//!
//! A small HTTP facade between a browser search UI and an Apache Solr
//! collection. Each endpoint reads its query string, builds Solr parameters,
//! makes exactly one GET to Solr, reshapes the JSON, and returns it.
//!
//! ```text
//!   browser ──GET /api/*──▶ gateway ──GET /select, /schema/fields──▶ Solr
//!           ◀──reshaped JSON──       ◀──────────── JSON ─────────────
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration: bind address, Solr URL, timeouts
//! - [`models`] - Wire types: request params, `Suggestion`, `CategoryFacet`, `SchemaField`
//! - [`solr::client`] - reqwest client for `/select` and `/schema/fields`
//! - [`solr::query`] - Boosted query expansion and per-endpoint Solr parameters
//! - [`solr::reshape`] - Suggestion dedup, facet decoding, sortable-field filtering
//! - [`api`] - Axum handlers, one per endpoint, each with its own failure shape
//! - [`state`] - Shared application state (config + Solr client)

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod api;
pub mod config;
pub mod models;
pub mod solr;
pub mod state;

use state::AppState;

/// All gateway routes, open to any origin.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/search", get(api::search::search))
        .route("/api/autocomplete", get(api::autocomplete::autocomplete))
        .route("/api/categories", get(api::categories::categories))
        .route("/api/fields", get(api::fields::fields))
        .layer(cors)
        .with_state(state)
}
