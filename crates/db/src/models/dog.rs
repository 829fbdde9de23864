//! Dog catalog entity model and DTOs.

use pawmatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A dog row from the `dogs` table.
///
/// `gender` and `size` hold wire codes (`m`/`f`/`u`, `s`/`m`/`l`/`xl`/`u`);
/// the check constraints in the schema pin the domains.
#[derive(Debug, Clone, FromRow)]
pub struct Dog {
    pub id: DbId,
    pub name: String,
    pub image_filename: String,
    pub breed: String,
    pub age: i32,
    pub gender: String,
    pub size: String,
    pub created_at: Timestamp,
}

/// External dog representation, echoed by selection and status endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct DogResponse {
    pub id: DbId,
    pub name: String,
    pub image_filename: String,
    pub breed: String,
    pub age: i32,
    pub gender: String,
    pub size: String,
}

impl From<Dog> for DogResponse {
    fn from(dog: Dog) -> Self {
        Self {
            id: dog.id,
            name: dog.name,
            image_filename: dog.image_filename,
            breed: dog.breed,
            age: dog.age,
            gender: dog.gender,
            size: dog.size,
        }
    }
}

/// DTO for inserting a catalog entry. Codes are validated by the caller.
pub struct CreateDog {
    pub name: String,
    pub image_filename: String,
    pub breed: String,
    pub age: i32,
    pub gender: String,
    pub size: String,
}
