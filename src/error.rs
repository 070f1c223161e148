use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// One of the three external systems the facade depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Database,
    Cache,
    Broker,
}

impl Backend {
    /// Stable identifier used as the key in the health connectivity map.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Database => "postgresql",
            Self::Cache => "redis",
            Self::Broker => "rabbitmq",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Database => "Database",
            Self::Cache => "Redis",
            Self::Broker => "RabbitMQ",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    /// A connection to the backend could not be established.
    #[error("{backend} service unavailable")]
    Unavailable {
        backend: Backend,
        #[source]
        source: anyhow::Error,
    },
    /// The requested cache key does not exist.
    #[error("Key not found")]
    NotFound,
    /// The backend accepted the connection but the operation failed.
    /// `context` is the only detail the client sees.
    #[error("{context}")]
    OperationFailed {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn unavailable(backend: Backend, source: impl Into<anyhow::Error>) -> Self {
        Self::Unavailable { backend, source: source.into() }
    }

    pub fn operation(context: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::OperationFailed { context, source: source.into() }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Unavailable { backend, source } => {
                tracing::warn!(backend = backend.key(), error = %source, "Backend unavailable");
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::NotFound => {
                tracing::debug!("Cache key not found");
                StatusCode::NOT_FOUND
            }
            AppError::OperationFailed { context, source } => {
                tracing::error!(error = %source, "{context}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_maps_to_503() {
        let err = AppError::unavailable(Backend::Broker, anyhow::anyhow!("refused"));
        assert_eq!(err.to_string(), "RabbitMQ service unavailable");
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn operation_failure_maps_to_500_with_generic_message() {
        let err = AppError::operation("Failed to send message", anyhow::anyhow!("channel dropped"));
        assert_eq!(err.to_string(), "Failed to send message");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn backend_keys_match_health_map() {
        assert_eq!(Backend::Database.key(), "postgresql");
        assert_eq!(Backend::Cache.key(), "redis");
        assert_eq!(Backend::Broker.key(), "rabbitmq");
    }
}
