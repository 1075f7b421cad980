//! Shared types for the database crate

pub mod errors;

pub use errors::{DatabaseError, UserError};

/// Result type for database setup operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Result type for user store operations
pub type UserResult<T> = Result<T, UserError>;
