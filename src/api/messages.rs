use crate::api::AppState;
use crate::api::schemas::messages::{MessageRequest, MessageResponse};
use crate::error::Result;
use axum::{Json, extract::State};

/// Publishes a message to the queue for its priority label.
///
/// # Errors
/// Returns `AppError::Unavailable` if the broker is unreachable and
/// `AppError::OperationFailed` if the publish fails.
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>> {
    let receipt = state.message_service.publish(&request.message, &request.priority).await?;

    Ok(Json(MessageResponse {
        id: receipt.id,
        message: receipt.message,
        status: "sent".to_string(),
        timestamp: receipt.timestamp,
    }))
}
