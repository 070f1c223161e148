use crate::api::AppState;
use crate::api::schemas::cache::{CacheReadResponse, CacheWriteParams, CacheWriteResponse};
use crate::error::Result;
use axum::{
    Json,
    extract::{Path, Query, State},
};

/// Looks up a cache key.
///
/// # Errors
/// Returns `AppError::NotFound` if the key is absent and
/// `AppError::Unavailable` if Redis is unreachable.
pub async fn get_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CacheReadResponse>> {
    let value = state.cache_service.get(&key).await?;
    Ok(Json(CacheReadResponse { key, value }))
}

/// Stores a value under a key with the fixed one-hour expiry.
///
/// # Errors
/// Returns `AppError::Unavailable` if Redis is unreachable.
pub async fn set_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<CacheWriteParams>,
) -> Result<Json<CacheWriteResponse>> {
    state.cache_service.set(&key, &params.value).await?;
    Ok(Json(CacheWriteResponse { key, value: params.value, status: "set".to_string() }))
}
