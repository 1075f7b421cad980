//! Error types for the persistence layer

use thiserror::Error;

/// Errors raised while setting up the database itself.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Database migration error: {0}")]
    MigrationError(String),
}

/// User store errors, surfaced unchanged through the service layer.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    UserNotFound,

    #[error("User name must not be empty")]
    InvalidName,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for UserError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                UserError::StoreUnavailable(error.to_string())
            }
            _ => UserError::DatabaseError(error.to_string()),
        }
    }
}
