//! Per-(user, dog) status ledger model.

use pawmatch_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A ledger row from the `user_dog_statuses` table.
///
/// At most one row exists per (user, dog) pair; a missing row reads as
/// undecided in the selection query.
#[derive(Debug, Clone, FromRow)]
pub struct UserDogStatus {
    pub id: DbId,
    pub user_id: DbId,
    pub dog_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
