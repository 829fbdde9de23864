//! Route definitions.

pub mod dogs;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy (trailing slashes are part of the contract):
///
/// ```text
/// /user/                      register (POST)
/// /user/login/                token issuance (POST)
/// /user/preferences/          get, put (auth required)
///
/// /dog/                       create catalog entry (POST, auth required)
/// /dog/{pk}/{status}/         set ledger status (PUT, auth required)
/// /dog/{pk}/{status}/next/    next matching dog (GET, auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(users::router()).merge(dogs::router())
}
