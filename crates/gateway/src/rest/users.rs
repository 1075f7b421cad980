//! User REST endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{GatewayError, GatewayResult};
use crate::state::GatewayState;
use roster_users::{CreateUserRequest, UpdateUserRequest, User};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

/// One-field payload for create and rename. Kept structured rather than a
/// bare string body; emptiness is rejected at this boundary.
#[derive(Debug, Deserialize)]
pub struct UserNameBody {
    pub name: String,
}

impl UserNameBody {
    fn into_name(self) -> GatewayResult<String> {
        if self.name.trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "User name must not be empty".to_string(),
            ));
        }
        Ok(self.name)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
}

/// Create user routes
pub fn create_user_routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/search", get(search_users))
        .route("/users/:id", put(update_user).delete(delete_user))
}

pub async fn list_users(
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<Json<Vec<UserResponse>>> {
    let users = state.user_service().list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn create_user(
    State(state): State<Arc<GatewayState>>,
    Json(body): Json<UserNameBody>,
) -> GatewayResult<impl IntoResponse> {
    let name = body.into_name()?;

    let user = state
        .user_service()
        .create_user(CreateUserRequest { name })
        .await?;

    // Location points at the listing with the new id, the same shape the
    // created-at responses of the rest of the API family use.
    let location = format!("/users?id={}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

pub async fn update_user(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<i64>,
    Json(body): Json<UserNameBody>,
) -> GatewayResult<Json<UserResponse>> {
    let name = body.into_name()?;

    let user = state
        .user_service()
        .update_user(id, UpdateUserRequest { name })
        .await?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn delete_user(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<i64>,
) -> GatewayResult<StatusCode> {
    state.user_service().delete_user(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_users(
    State(state): State<Arc<GatewayState>>,
    Query(params): Query<SearchQuery>,
) -> GatewayResult<Json<Vec<UserResponse>>> {
    let users = state.user_service().search_users(&params.name).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
