use crate::api::AppState;
use crate::api::schemas::users::UserListResponse;
use crate::error::Result;
use axum::{Json, extract::State};

/// Lists the 10 most recently created users, newest first.
///
/// # Errors
/// Returns `AppError::Unavailable` if the database is unreachable and
/// `AppError::OperationFailed` if the query fails.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UserListResponse>> {
    let users = state.user_service.list_recent().await?;
    Ok(Json(UserListResponse { users }))
}
