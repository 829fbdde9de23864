//! Request handlers, one module per resource.

pub mod dogs;
pub mod preferences;
pub mod users;
