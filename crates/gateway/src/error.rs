//! Error types for the gateway layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_users::UserError;
use serde_json::json;
use thiserror::Error;

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = json!({
            "error": status.as_str(),
            "message": self.to_string(),
        });

        (status, Json(error_response)).into_response()
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<UserError> for GatewayError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::UserNotFound => GatewayError::NotFound("User not found".to_string()),
            UserError::InvalidName => {
                GatewayError::InvalidRequest("User name must not be empty".to_string())
            }
            UserError::StoreUnavailable(msg) => GatewayError::StoreUnavailable(msg),
            UserError::DatabaseError(msg) => GatewayError::DatabaseError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors_map_to_expected_statuses() {
        assert_eq!(
            GatewayError::from(UserError::UserNotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GatewayError::from(UserError::InvalidName).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::from(UserError::StoreUnavailable("pool closed".into())).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            GatewayError::from(UserError::DatabaseError("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
