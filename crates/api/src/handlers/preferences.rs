//! Handlers for the `/user/preferences` resource.

use axum::extract::State;
use axum::Json;
use pawmatch_core::preferences::PreferenceSets;
use pawmatch_db::models::preference::{PreferenceResponse, SavePreference};
use pawmatch_db::repositories::PreferenceRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// A code set on the wire: either a comma-joined string (`"b,y,a"`) or a
/// list of codes (`["b", "y", "a"]`). Both client encodings are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CodeList {
    Joined(String),
    List(Vec<String>),
}

impl CodeList {
    /// Normalize to the comma-joined form the parser consumes.
    fn joined(&self) -> String {
        match self {
            CodeList::Joined(s) => s.clone(),
            CodeList::List(items) => items.join(","),
        }
    }
}

/// Request body for `PUT /api/user/preferences/`. Full replace, not merge.
#[derive(Debug, Deserialize)]
pub struct PutPreferencesRequest {
    pub age: CodeList,
    pub gender: CodeList,
    pub size: CodeList,
}

/// GET /api/user/preferences/
///
/// Returns the caller's preference sets, creating the all-empty row on
/// first access (the default-to-empty-set policy).
pub async fn get_preferences(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<PreferenceResponse>> {
    let pref = PreferenceRepo::get_or_create(&state.pool, user.user_id).await?;
    Ok(Json(pref.into()))
}

/// PUT /api/user/preferences/
///
/// Full replace of all three sets. Every element is validated against its
/// code domain; violations across all fields are reported together and the
/// stored row is left untouched on failure.
pub async fn put_preferences(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<PutPreferencesRequest>,
) -> AppResult<Json<PreferenceResponse>> {
    let sets = PreferenceSets::from_codes(
        &input.age.joined(),
        &input.gender.joined(),
        &input.size.joined(),
    )
    .map_err(AppError::Core)?;

    let save = SavePreference {
        age: sets.age_codes(),
        gender: sets.gender_codes(),
        size: sets.size_codes(),
    };
    let pref = PreferenceRepo::upsert(&state.pool, user.user_id, &save).await?;

    Ok(Json(pref.into()))
}
