//! User entity definitions

use serde::{Deserialize, Serialize};

/// A user record as held by the store.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Request for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)
    }
}

/// Request for renaming an existing user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_blank_names() {
        assert!(CreateUserRequest {
            name: "Alice".to_string()
        }
        .validate()
        .is_ok());
        assert!(CreateUserRequest {
            name: String::new()
        }
        .validate()
        .is_err());
        assert!(CreateUserRequest {
            name: "   ".to_string()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn update_request_rejects_blank_names() {
        assert!(UpdateUserRequest {
            name: "Alicia".to_string()
        }
        .validate()
        .is_ok());
        assert!(UpdateUserRequest {
            name: " ".to_string()
        }
        .validate()
        .is_err());
    }
}
