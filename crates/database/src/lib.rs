//! Roster Database Crate
//!
//! Persistence layer for the Roster backend: connection management,
//! migrations, and the user repository.

use sqlx::SqlitePool;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::prepare_database;
pub use migrations::run_migrations;

// Re-export repositories
pub use repos::UserRepository;

// Re-export entities
pub use entities::{CreateUserRequest, UpdateUserRequest, User};

// Re-export types
pub use types::{
    errors::{DatabaseError, UserError},
    DatabaseResult, UserResult,
};

/// Initialize the database: connect and apply migrations.
pub async fn initialize_database(
    config: &roster_config::DatabaseConfig,
) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    Ok(pool)
}
