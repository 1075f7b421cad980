//! User service for managing user operations.

use super::memory_repository::MemoryUserRepository;
use roster_database::{
    CreateUserRequest, UpdateUserRequest, User, UserError, UserRepository, UserResult,
};
use sqlx::SqlitePool;

/// Store interface consumed by the service.
///
/// `create` assigns a fresh unique id and persists before returning;
/// `update` and `delete` are observably atomic per call.
pub trait UserRepo {
    async fn list_all(&self) -> UserResult<Vec<User>>;
    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;
    async fn create(&self, request: &CreateUserRequest) -> UserResult<User>;
    async fn update(&self, id: i64, request: &UpdateUserRequest) -> UserResult<User>;
    async fn delete(&self, id: i64) -> UserResult<()>;
    async fn search_by_name(&self, pattern: &str) -> UserResult<Vec<User>>;
}

/// Service for managing user operations
pub struct UserService<R> {
    user_repository: R,
}

impl UserService<UserRepository> {
    /// Create a new user service backed by the database repository
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user_repository: UserRepository::new(pool),
        }
    }
}

impl UserService<MemoryUserRepository> {
    /// Create a new user service backed by the in-memory repository
    pub fn new_in_memory() -> Self {
        Self {
            user_repository: MemoryUserRepository::new(),
        }
    }
}

impl<R> UserService<R>
where
    R: UserRepo,
{
    /// List all users in store order
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.user_repository.list_all().await
    }

    /// Create a new user
    pub async fn create_user(&self, request: CreateUserRequest) -> UserResult<User> {
        if request.validate().is_err() {
            return Err(UserError::InvalidName);
        }

        let user = self.user_repository.create(&request).await?;

        tracing::info!(user_id = user.id, name = %user.name, "created user");

        Ok(user)
    }

    /// Rename a user. Blank names are rejected here exactly as on create.
    pub async fn update_user(&self, id: i64, request: UpdateUserRequest) -> UserResult<User> {
        if request.validate().is_err() {
            return Err(UserError::InvalidName);
        }

        let user = self.user_repository.update(id, &request).await?;

        tracing::info!(user_id = id, name = %user.name, "updated user");

        Ok(user)
    }

    /// Delete a user
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        self.user_repository.delete(id).await?;

        tracing::warn!(user_id = id, "deleted user");

        Ok(())
    }

    /// Search users by name substring, case-sensitively. An empty pattern
    /// matches every user, so no pre-trimming here.
    pub async fn search_users(&self, pattern: &str) -> UserResult<Vec<User>> {
        self.user_repository.search_by_name(pattern).await
    }
}

impl UserRepo for UserRepository {
    async fn list_all(&self) -> UserResult<Vec<User>> {
        self.list_all().await
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        self.find_by_id(id).await
    }

    async fn create(&self, request: &CreateUserRequest) -> UserResult<User> {
        self.create(request).await
    }

    async fn update(&self, id: i64, request: &UpdateUserRequest) -> UserResult<User> {
        self.update(id, request).await
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        self.delete(id).await
    }

    async fn search_by_name(&self, pattern: &str) -> UserResult<Vec<User>> {
        self.search_by_name(pattern).await
    }
}

impl UserRepo for MemoryUserRepository {
    async fn list_all(&self) -> UserResult<Vec<User>> {
        self.list_all().await
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        self.find_by_id(id).await
    }

    async fn create(&self, request: &CreateUserRequest) -> UserResult<User> {
        self.create(request).await
    }

    async fn update(&self, id: i64, request: &UpdateUserRequest) -> UserResult<User> {
        self.update(id, request).await
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        self.delete(id).await
    }

    async fn search_by_name(&self, pattern: &str) -> UserResult<Vec<User>> {
        self.search_by_name(pattern).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn create_test_service() -> UserService<MemoryUserRepository> {
        UserService::new_in_memory()
    }

    fn create_request(name: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
        }
    }

    fn update_request(name: &str) -> UpdateUserRequest {
        UpdateUserRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let service = create_test_service();

        let user = service.create_user(create_request("Alice")).await.unwrap();

        assert!(user.id > 0);
        assert_eq!(user.name, "Alice");
    }

    #[tokio::test]
    async fn test_create_user_rejects_blank_names() {
        let service = create_test_service();

        let empty = service.create_user(create_request("")).await;
        assert!(matches!(empty, Err(UserError::InvalidName)));

        let blank = service.create_user(create_request("   ")).await;
        assert!(matches!(blank, Err(UserError::InvalidName)));

        assert!(service.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_then_list_contains_exactly_one_new_user() {
        let service = create_test_service();

        let before = service.list_users().await.unwrap();
        let created = service.create_user(create_request("Alice")).await.unwrap();
        let after = service.list_users().await.unwrap();

        assert_eq!(after.len(), before.len() + 1);
        let matching: Vec<_> = after.iter().filter(|u| u.name == "Alice").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id, created.id);
        assert!(!before.iter().any(|u| u.id == created.id));
    }

    #[tokio::test]
    async fn test_update_user() {
        let service = create_test_service();

        let user = service.create_user(create_request("Alice")).await.unwrap();
        let updated = service
            .update_user(user.id, update_request("Alicia"))
            .await
            .unwrap();

        assert_eq!(updated.id, user.id);
        assert_eq!(updated.name, "Alicia");
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let service = create_test_service();

        let user = service.create_user(create_request("Alice")).await.unwrap();
        let result = service.update_user(user.id, update_request(" ")).await;

        assert!(matches!(result, Err(UserError::InvalidName)));
        // Name untouched on rejection.
        let listed = service.list_users().await.unwrap();
        assert_eq!(listed[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_update_nonexistent_user() {
        let service = create_test_service();

        let result = service.update_user(999, update_request("Ghost")).await;
        assert!(matches!(result, Err(UserError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_delete_user_and_id_is_never_reused() {
        let service = create_test_service();

        let user = service.create_user(create_request("Alice")).await.unwrap();
        service.delete_user(user.id).await.unwrap();

        assert!(!service
            .list_users()
            .await
            .unwrap()
            .iter()
            .any(|u| u.id == user.id));

        let replacement = service.create_user(create_request("Bob")).await.unwrap();
        assert_ne!(replacement.id, user.id);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_user() {
        let service = create_test_service();

        let result = service.delete_user(99999).await;
        assert!(matches!(result, Err(UserError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_search_matches_list_subset() {
        let service = create_test_service();

        service.create_user(create_request("Alicia")).await.unwrap();
        service.create_user(create_request("Bob")).await.unwrap();
        service.create_user(create_request("Malice")).await.unwrap();

        let all = service.list_users().await.unwrap();
        let matches = service.search_users("lic").await.unwrap();

        let expected: Vec<_> = all
            .iter()
            .filter(|u| u.name.contains("lic"))
            .cloned()
            .collect();
        assert_eq!(matches, expected);
        assert_eq!(matches.len(), 2);
    }

    #[tokio::test]
    async fn test_search_is_case_sensitive() {
        let service = create_test_service();

        service.create_user(create_request("Alice")).await.unwrap();
        service.create_user(create_request("alice")).await.unwrap();

        let upper = service.search_users("Ali").await.unwrap();
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_search_empty_pattern_returns_all_users() {
        let service = create_test_service();

        service.create_user(create_request("Alice")).await.unwrap();
        service.create_user(create_request("Bob")).await.unwrap();

        let results = service.search_users("").await.unwrap();
        assert_eq!(results, service.list_users().await.unwrap());
    }

    #[tokio::test]
    async fn test_search_no_results_is_empty_not_error() {
        let service = create_test_service();

        service.create_user(create_request("Alice")).await.unwrap();

        let results = service.search_users("nonexistent").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_adds_lose_no_entries() {
        let service = Arc::new(create_test_service());
        const WRITERS: usize = 16;

        let mut handles = Vec::with_capacity(WRITERS);
        for i in 0..WRITERS {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service
                    .create_user(CreateUserRequest {
                        name: format!("user-{i}"),
                    })
                    .await
                    .unwrap()
            }));
        }

        let mut ids = Vec::with_capacity(WRITERS);
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), WRITERS);
        assert_eq!(service.list_users().await.unwrap().len(), WRITERS);
    }

    #[tokio::test]
    async fn test_user_lifecycle_complete() {
        let service = create_test_service();

        let alice = service.create_user(create_request("Alice")).await.unwrap();
        let bob = service.create_user(create_request("Bob")).await.unwrap();
        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);

        let renamed = service
            .update_user(alice.id, update_request("Alicia"))
            .await
            .unwrap();
        assert_eq!(renamed.name, "Alicia");

        service.delete_user(bob.id).await.unwrap();

        let remaining = service.list_users().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Alicia");

        let found = service.search_users("lic").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, alice.id);
    }
}
