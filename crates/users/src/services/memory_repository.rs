//! In-memory user repository.
//!
//! Second implementation of the store interface, used by the service unit
//! tests. Deliberately follows the canonical id-keyed, case-sensitive
//! semantics of the persistent repository so the two never disagree on
//! identity. One mutex guards the whole read-modify-replace cycle of every
//! operation; concurrent writers serialize instead of losing entries.

use roster_database::{CreateUserRequest, UpdateUserRequest, User, UserError, UserResult};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug)]
struct MemoryState {
    users: Vec<User>,
    next_id: i64,
}

/// Process-local user store
#[derive(Clone)]
pub struct MemoryUserRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState {
                users: Vec::new(),
                next_id: 1,
            })),
        }
    }

    pub async fn list_all(&self) -> UserResult<Vec<User>> {
        let state = self.state.lock().await;
        Ok(state.users.clone())
    }

    pub async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    pub async fn create(&self, request: &CreateUserRequest) -> UserResult<User> {
        let mut state = self.state.lock().await;

        let user = User {
            id: state.next_id,
            name: request.name.clone(),
        };
        // next_id only moves forward, so deleted ids are never reassigned.
        state.next_id += 1;
        state.users.push(user.clone());

        Ok(user)
    }

    pub async fn update(&self, id: i64, request: &UpdateUserRequest) -> UserResult<User> {
        let mut state = self.state.lock().await;

        match state.users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.name = request.name.clone();
                Ok(user.clone())
            }
            None => Err(UserError::UserNotFound),
        }
    }

    pub async fn delete(&self, id: i64) -> UserResult<()> {
        let mut state = self.state.lock().await;

        match state.users.iter().position(|user| user.id == id) {
            Some(index) => {
                state.users.remove(index);
                Ok(())
            }
            None => Err(UserError::UserNotFound),
        }
    }

    pub async fn search_by_name(&self, pattern: &str) -> UserResult<Vec<User>> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .iter()
            .filter(|user| user.name.contains(pattern))
            .cloned()
            .collect())
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}
