//! Business logic layer

pub mod memory_repository;
pub mod user_service;

pub use memory_repository::MemoryUserRepository;
pub use user_service::{UserRepo, UserService};
