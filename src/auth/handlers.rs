use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{LoginRequest, PublicUser, RegisterRequest};
use super::password;
use super::repo_types::User;
use super::services;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// POST /auth/register — validate the form, reject duplicates, store the
/// hashed credential, and hand back the public user.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    payload.username = payload.username.trim().to_string();
    payload.email = payload.email.trim().to_lowercase();
    payload.full_name = payload.full_name.trim().to_string();

    let age = services::validate_registration(&payload)?;

    // Ensure username and email are not taken
    if User::find_by_username(&state.db, &payload.username).await?.is_some() {
        warn!(username = %payload.username, "username already registered");
        return Err(ApiError::Conflict("Username already exists".into()));
    }
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already exists".into()));
    }

    let hash = password::hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload, &hash, age).await?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(PublicUser {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
        }),
    ))
}

/// POST /auth/login — a single synchronous credential check. Unknown
/// username and wrong password fail the same way.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    services::validate_login(&payload)?;

    let username = payload.username.trim();
    let user = match User::find_by_username(&state.db, username).await? {
        Some(u) => u,
        None => {
            warn!(username = %username, "login unknown username");
            return Err(ApiError::Unauthorized);
        }
    };

    let ok = password::verify_password(&payload.password, &user.password_hash)?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized);
    }

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(PublicUser {
        id: user.id,
        username: user.username,
        email: user.email,
        full_name: user.full_name,
    }))
}
