//! # Roster Users Crate
//!
//! Domain layer for the Roster backend: the user resource service, the
//! store interface with its two implementations (database-backed and
//! in-memory), and the JWT token manager that gates the HTTP surface.
//!
//! - **Services**: business logic over the store interface
//! - **Types**: token error types
//! - **Utils**: JWT issuance and validation

pub mod services;
pub mod types;
pub mod utils;

// Re-export database types and repositories
pub use roster_database::{
    CreateUserRequest, UpdateUserRequest, User, UserError, UserRepository, UserResult,
};

// Re-export main types for convenience
pub use services::{MemoryUserRepository, UserRepo, UserService};
pub use types::{AuthError, AuthResult};
pub use utils::{Claims, TokenManager};
