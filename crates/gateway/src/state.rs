//! Shared application state for the gateway

use roster_database::UserRepository;
use roster_users::{TokenManager, UserService};
use sqlx::SqlitePool;
use std::sync::Arc;

/// JWT configuration. Carries no default secret: callers assemble it from
/// validated application configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

/// Shared application state containing all services
#[derive(Clone)]
pub struct GatewayState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// User service
    pub user_service: Arc<UserService<UserRepository>>,
    /// Bearer token validation
    pub token_manager: Arc<TokenManager>,
}

impl GatewayState {
    /// Create a new gateway state with all services initialized
    pub fn new(pool: SqlitePool, jwt_config: JwtConfig) -> Self {
        let user_service = Arc::new(UserService::new(pool.clone()));
        let token_manager = Arc::new(TokenManager::new(
            &jwt_config.secret,
            jwt_config.issuer,
            jwt_config.audience,
        ));

        Self {
            pool,
            user_service,
            token_manager,
        }
    }

    /// Get a user service reference
    pub fn user_service(&self) -> &UserService<UserRepository> {
        &self.user_service
    }

    /// Get a token manager reference
    pub fn token_manager(&self) -> &TokenManager {
        &self.token_manager
    }
}
