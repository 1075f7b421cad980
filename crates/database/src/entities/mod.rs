//! Entity definitions for the database layer

pub mod user;

pub use user::{CreateUserRequest, UpdateUserRequest, User};
