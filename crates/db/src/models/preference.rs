//! User preference entity model and DTOs.

use pawmatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A preference row from the `user_preferences` table.
///
/// The three columns are comma-joined code lists; parse them through
/// `pawmatch_core::preferences::PreferenceSets` before filtering on them.
#[derive(Debug, Clone, FromRow)]
pub struct UserPreference {
    pub id: DbId,
    pub user_id: DbId,
    pub age: String,
    pub gender: String,
    pub size: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// External preference representation (`user_id` stays internal).
#[derive(Debug, Clone, Serialize)]
pub struct PreferenceResponse {
    pub id: DbId,
    pub age: String,
    pub gender: String,
    pub size: String,
}

impl From<UserPreference> for PreferenceResponse {
    fn from(pref: UserPreference) -> Self {
        Self {
            id: pref.id,
            age: pref.age,
            gender: pref.gender,
            size: pref.size,
        }
    }
}

/// DTO for the full-replace write. Fields are normalized, validated
/// comma-joined code lists.
pub struct SavePreference {
    pub age: String,
    pub gender: String,
    pub size: String,
}
