//! Handlers for the `/dog` resource: catalog creation, selection, and
//! status transitions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pawmatch_core::codes::{AgeBracket, DogStatus, Gender, Size};
use pawmatch_core::error::{CoreError, FieldErrors};
use pawmatch_core::preferences::PreferenceSets;
use pawmatch_core::types::DbId;
use pawmatch_db::models::dog::{CreateDog, DogResponse};
use pawmatch_db::repositories::{DogRepo, PreferenceRepo, UserDogRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/dog/`.
#[derive(Debug, Deserialize)]
pub struct CreateDogRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_filename: String,
    #[serde(default)]
    pub breed: String,
    pub age: i32,
    /// Gender code; defaults to unknown when omitted.
    pub gender: Option<String>,
    /// Size code; defaults to unknown when omitted.
    pub size: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/dog/
///
/// Add a dog to the shared catalog. Codes and the age contract are
/// validated together; violations name every offending field.
pub async fn create_dog(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateDogRequest>,
) -> AppResult<(StatusCode, Json<DogResponse>)> {
    let mut errors = FieldErrors::new();

    let gender = input.gender.unwrap_or_else(|| "u".to_string());
    if Gender::from_code(&gender).is_none() {
        errors.push("gender", format!("\"{gender}\" is not a valid gender code"));
    }

    let size = input.size.unwrap_or_else(|| "u".to_string());
    if Size::from_code(&size).is_none() {
        errors.push("size", format!("\"{size}\" is not a valid size code"));
    }

    if AgeBracket::from_age(input.age).is_none() {
        errors.push("age", format!("age {} is outside 1-99", input.age));
    }

    if !errors.is_empty() {
        return Err(errors.into_error().into());
    }

    let dog = DogRepo::create(
        &state.pool,
        &CreateDog {
            name: input.name,
            image_filename: input.image_filename,
            breed: input.breed,
            age: input.age,
            gender,
            size,
        },
    )
    .await?;

    tracing::info!(dog_id = dog.id, "created catalog entry");

    Ok((StatusCode::CREATED, Json(dog.into())))
}

/// GET /api/dog/{pk}/{status}/next/
///
/// Return the next dog after id `pk` that satisfies the caller's
/// preference sets and carries the requested status (a dog with no ledger
/// row counts as undecided). `pk = 0` starts from the beginning. A missing
/// preference row is created empty rather than erroring; empty sets simply
/// exhaust immediately.
pub async fn next_dog(
    State(state): State<AppState>,
    user: AuthUser,
    Path((pk, status)): Path<(DbId, String)>,
) -> AppResult<Json<DogResponse>> {
    let status = parse_status_segment(&status)?;

    let pref = PreferenceRepo::get_or_create(&state.pool, user.user_id).await?;
    let sets = PreferenceSets::from_codes(&pref.age, &pref.gender, &pref.size).map_err(|e| {
        AppError::InternalError(format!(
            "Corrupt preference row for user {}: {e}",
            user.user_id
        ))
    })?;

    let dog = DogRepo::next_match(&state.pool, user.user_id, status, pk, &sets)
        .await?
        .ok_or_else(|| AppError::NotFound("No more dogs to show".to_string()))?;

    Ok(Json(dog.into()))
}

/// PUT /api/dog/{pk}/{status}/
///
/// Set the caller's ledger status for dog `pk`, creating the row if this
/// is the first verdict. Overwrites -- repeating a status is a no-op.
/// Echoes the dog's catalog representation.
pub async fn set_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path((pk, status)): Path<(DbId, String)>,
) -> AppResult<Json<DogResponse>> {
    let status = parse_status_segment(&status)?;

    let dog = DogRepo::find_by_id(&state.pool, pk)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "dog",
            id: pk,
        })?;

    UserDogRepo::set_status(&state.pool, user.user_id, dog.id, status).await?;

    Ok(Json(dog.into()))
}

/// Parse the `{status}` path segment.
///
/// The original route only matched `liked|disliked|undecided`, so an
/// unrecognized segment is a routing miss, not a bad request.
fn parse_status_segment(segment: &str) -> Result<DogStatus, AppError> {
    DogStatus::from_path_segment(segment)
        .ok_or_else(|| AppError::NotFound(format!("Unknown status '{segment}'")))
}
