//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod dog_repo;
pub mod preference_repo;
pub mod user_dog_repo;
pub mod user_repo;

pub use dog_repo::DogRepo;
pub use preference_repo::PreferenceRepo;
pub use user_dog_repo::UserDogRepo;
pub use user_repo::UserRepo;
