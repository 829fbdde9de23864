//! Repository for the `user_preferences` table.

use pawmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::preference::{SavePreference, UserPreference};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, age, gender, size, created_at, updated_at";

/// Provides one-row-per-user preference storage.
pub struct PreferenceRepo;

impl PreferenceRepo {
    /// Find the preference row for a user.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserPreference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_preferences WHERE user_id = $1");
        sqlx::query_as::<_, UserPreference>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Return the user's preference row, creating the all-empty row on
    /// first access.
    ///
    /// A concurrent first access races on the insert; the unique constraint
    /// plus `ON CONFLICT DO NOTHING` resolves the race, and the loser falls
    /// back to reading the winner's row.
    pub async fn get_or_create(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<UserPreference, sqlx::Error> {
        if let Some(pref) = Self::find_by_user(pool, user_id).await? {
            return Ok(pref);
        }

        let insert = format!(
            "INSERT INTO user_preferences (user_id, age, gender, size)
             VALUES ($1, '', '', '')
             ON CONFLICT (user_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        if let Some(pref) = sqlx::query_as::<_, UserPreference>(&insert)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
        {
            return Ok(pref);
        }

        // Lost the creation race; the row now exists.
        let select = format!("SELECT {COLUMNS} FROM user_preferences WHERE user_id = $1");
        sqlx::query_as::<_, UserPreference>(&select)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Full-replace upsert of a user's preference sets.
    ///
    /// `ON CONFLICT (user_id) DO UPDATE` guarantees one row per user
    /// whether or not the row existed before the write.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        input: &SavePreference,
    ) -> Result<UserPreference, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_preferences (user_id, age, gender, size)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id) DO UPDATE
             SET age = EXCLUDED.age,
                 gender = EXCLUDED.gender,
                 size = EXCLUDED.size,
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserPreference>(&query)
            .bind(user_id)
            .bind(&input.age)
            .bind(&input.gender)
            .bind(&input.size)
            .fetch_one(pool)
            .await
    }
}
