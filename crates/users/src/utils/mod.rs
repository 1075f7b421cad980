//! Internal utilities

pub mod jwt;

pub use jwt::{Claims, TokenManager};
