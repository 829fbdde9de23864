//! Handlers for the `/user` resource (registration and login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pawmatch_core::error::{CoreError, FieldErrors};
use pawmatch_db::models::user::{CreateUser, UserResponse};
use pawmatch_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LEN: usize = 8;

/// Maximum username length accepted at registration.
const MAX_USERNAME_LEN: usize = 150;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/user/`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /api/user/login/`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for `POST /api/user/login/` -- the opaque bearer token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/user/
///
/// Register a new account. The password is hashed before storage and never
/// echoed; a duplicate username maps to 409 through the constraint
/// classifier.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let mut errors = FieldErrors::new();

    let username = input.username.trim();
    if username.is_empty() {
        errors.push("username", "username must not be empty");
    } else if username.len() > MAX_USERNAME_LEN {
        errors.push(
            "username",
            format!("username must be at most {MAX_USERNAME_LEN} characters"),
        );
    }

    if input.password.len() < MIN_PASSWORD_LEN {
        errors.push(
            "password",
            format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }

    if !errors.is_empty() {
        return Err(errors.into_error().into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "registered user");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/user/login/
///
/// Authenticate with username + password; returns a bearer token. The
/// failure message never says which half was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(TokenResponse { token }))
}
