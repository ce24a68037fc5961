//! HTTP handlers for the user resource

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{Error, Result},
    extract,
    models::{CreateUserRequest, CreateUserResponse, MessageResponse, User},
    state::AppState,
};

/// `GET /api/users`: all users, newest first
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = state
        .users()
        .list()
        .await
        .map_err(|e| Error::store(e, "Failed to fetch users"))?;

    Ok(Json(users))
}

/// `GET /api/users/:id`
pub async fn get_user(
    State(state): State<AppState>,
    extract::Path(id): extract::Path<i64>,
) -> Result<Json<User>> {
    let user = state
        .users()
        .find_by_id(id)
        .await
        .map_err(|e| Error::store(e, "Failed to fetch user"))?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// `POST /api/users`: validation runs before any store call
pub async fn create_user(
    State(state): State<AppState>,
    extract::Json(request): extract::Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>)> {
    let (name, email) = request.validate().map_err(Error::Validation)?;

    let user = state
        .users()
        .create(&name, &email)
        .await
        .map_err(|e| Error::store(e, "Failed to create user"))?;

    tracing::info!(id = user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            message: "User created successfully".to_string(),
        }),
    ))
}

/// `DELETE /api/users/:id`: zero rows affected means 404
pub async fn delete_user(
    State(state): State<AppState>,
    extract::Path(id): extract::Path<i64>,
) -> Result<Json<MessageResponse>> {
    let deleted = state
        .users()
        .delete(id)
        .await
        .map_err(|e| Error::store(e, "Failed to delete user"))?;

    if !deleted {
        return Err(Error::NotFound("User not found".to_string()));
    }

    tracing::info!(id, "User deleted");

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
