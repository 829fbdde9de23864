//! Repository for the `dogs` table, including the selection query.

use pawmatch_core::codes::DogStatus;
use pawmatch_core::preferences::PreferenceSets;
use pawmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::dog::{CreateDog, Dog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image_filename, breed, age, gender, size, created_at";

/// Same columns qualified with the `d` alias used by the selection join.
const QUALIFIED_COLUMNS: &str =
    "d.id, d.name, d.image_filename, d.breed, d.age, d.gender, d.size, d.created_at";

/// Provides catalog operations and the preference-filtered selection.
pub struct DogRepo;

impl DogRepo {
    /// Insert a catalog entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDog) -> Result<Dog, sqlx::Error> {
        let query = format!(
            "INSERT INTO dogs (name, image_filename, breed, age, gender, size)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(&input.name)
            .bind(&input.image_filename)
            .bind(&input.breed)
            .bind(input.age)
            .bind(&input.gender)
            .bind(&input.size)
            .fetch_one(pool)
            .await
    }

    /// Find a dog by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE id = $1");
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The selection engine: the next dog after `cursor_id` that satisfies
    /// the user's preference sets and carries the requested ledger status.
    ///
    /// The ledger is joined with `LEFT JOIN` and read through
    /// `COALESCE(status, 'u')`, so a dog with no ledger row is undecided by
    /// default; nothing is written during selection. Candidates are ordered
    /// by id ascending with no secondary key, and empty preference sets
    /// match no dog at all.
    pub async fn next_match(
        pool: &PgPool,
        user_id: DbId,
        status: DogStatus,
        cursor_id: DbId,
        prefs: &PreferenceSets,
    ) -> Result<Option<Dog>, sqlx::Error> {
        let ages = prefs.acceptable_ages();
        let genders = prefs.gender_code_list();
        let sizes = prefs.size_code_list();

        tracing::debug!(
            user_id,
            status = %status,
            cursor_id,
            ages = ages.len(),
            genders = genders.len(),
            sizes = sizes.len(),
            "selecting next dog"
        );

        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM dogs d
             LEFT JOIN user_dog_statuses uds
                    ON uds.dog_id = d.id AND uds.user_id = $1
             WHERE d.age = ANY($2)
               AND d.gender = ANY($3)
               AND d.size = ANY($4)
               AND COALESCE(uds.status, 'u') = $5
               AND d.id > $6
             ORDER BY d.id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(user_id)
            .bind(&ages)
            .bind(&genders)
            .bind(&sizes)
            .bind(status.as_code())
            .bind(cursor_id)
            .fetch_optional(pool)
            .await
    }
}
