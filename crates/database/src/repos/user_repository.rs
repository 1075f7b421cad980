//! User repository for database operations.

use crate::entities::{CreateUserRequest, UpdateUserRequest, User};
use crate::types::{UserError, UserResult};
use sqlx::{Row, SqlitePool};

/// Repository for user database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every user in store order.
    pub async fn list_all(&self) -> UserResult<Vec<User>> {
        let rows = sqlx::query("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| User {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let row = sqlx::query("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            name: row.get("name"),
        }))
    }

    /// Create a new user. The store assigns the id; deleted ids are never
    /// handed out again (AUTOINCREMENT).
    pub async fn create(&self, request: &CreateUserRequest) -> UserResult<User> {
        let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
            .bind(&request.name)
            .execute(&self.pool)
            .await?;

        let user_id = result.last_insert_rowid();

        self.find_by_id(user_id)
            .await?
            .ok_or_else(|| UserError::DatabaseError("failed to retrieve created user".to_string()))
    }

    /// Rename a user. Single statement, so a concurrent delete can never
    /// interleave between lookup and mutation.
    pub async fn update(&self, id: i64, request: &UpdateUserRequest) -> UserResult<User> {
        let row = sqlx::query("UPDATE users SET name = ? WHERE id = ? RETURNING id, name")
            .bind(&request.name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(User {
                id: row.get("id"),
                name: row.get("name"),
            }),
            None => Err(UserError::UserNotFound),
        }
    }

    /// Delete a user
    pub async fn delete(&self, id: i64) -> UserResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound);
        }

        Ok(())
    }

    /// Search users whose name contains `pattern` as a case-sensitive
    /// substring. An empty pattern matches every user. `instr` rather than
    /// LIKE: LIKE folds ASCII case under the default collation.
    pub async fn search_by_name(&self, pattern: &str) -> UserResult<Vec<User>> {
        let rows = sqlx::query("SELECT id, name FROM users WHERE instr(name, ?) > 0 ORDER BY id")
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| User {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }

    /// Get user count
    pub async fn count(&self) -> UserResult<i64> {
        let count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.unwrap_or(0))
    }
}
