//! Error types for the users crate

use thiserror::Error;

/// Token validation and issuance errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token creation failed: {0}")]
    TokenCreationFailed(String),
}
