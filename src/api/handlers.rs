//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::ExpiringStore;
use crate::error::Result;
use crate::models::{
    DeleteResponse, GetResponse, HealthResponse, KeyParams, PutParams, PutResponse, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared expiring store
    pub cache: Arc<ExpiringStore>,
}

impl AppState {
    /// Wraps an existing store handle.
    pub fn new(cache: Arc<ExpiringStore>) -> Self {
        Self { cache }
    }
}

/// Handler for `POST /cache/put?key=..&value=..&ttl=..`
///
/// `ttl` is in milliseconds and must be positive.
pub async fn put_handler(
    State(state): State<AppState>,
    Query(params): Query<PutParams>,
) -> Result<Json<PutResponse>> {
    let (key, value, ttl) = params.validate()?;
    state.cache.put(key.clone(), value, ttl)?;

    Ok(Json(PutResponse::new(key)))
}

/// Handler for `GET /cache/get?key=..`
///
/// A missing or expired key yields `"value": null`, not an error.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(params): Query<KeyParams>,
) -> Json<GetResponse> {
    let value = state.cache.get(&params.key);

    Json(GetResponse::new(params.key, value))
}

/// Handler for `DELETE /cache/delete?key=..`
///
/// Always succeeds, whether or not the key existed.
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(params): Query<KeyParams>,
) -> Json<DeleteResponse> {
    state.cache.delete(&params.key);

    Json(DeleteResponse::new(params.key))
}

/// Handler for `GET /stats`
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
