//! Repository for the `user_dog_statuses` ledger.

use pawmatch_core::codes::DogStatus;
use pawmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_dog::UserDogStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, dog_id, status, created_at, updated_at";

/// Provides ledger reads and the status-transition upsert.
pub struct UserDogRepo;

impl UserDogRepo {
    /// Find the ledger row for a (user, dog) pair.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        dog_id: DbId,
    ) -> Result<Option<UserDogStatus>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM user_dog_statuses WHERE user_id = $1 AND dog_id = $2");
        sqlx::query_as::<_, UserDogStatus>(&query)
            .bind(user_id)
            .bind(dog_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the status for a (user, dog) pair, creating the row if it
    /// does not exist yet.
    ///
    /// `ON CONFLICT (user_id, dog_id) DO UPDATE` makes a racing
    /// create-if-missing resolve to an update rather than a duplicate row
    /// or a constraint error; repeating the same status is a no-op beyond
    /// touching `updated_at`. Transitions overwrite -- no history is kept.
    pub async fn set_status(
        pool: &PgPool,
        user_id: DbId,
        dog_id: DbId,
        status: DogStatus,
    ) -> Result<UserDogStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_dog_statuses (user_id, dog_id, status)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, dog_id) DO UPDATE
             SET status = EXCLUDED.status,
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserDogStatus>(&query)
            .bind(user_id)
            .bind(dog_id)
            .bind(status.as_code())
            .fetch_one(pool)
            .await
    }
}
