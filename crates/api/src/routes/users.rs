//! Route definitions for the `/user` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{preferences, users};
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// POST /user/               -> register
/// POST /user/login/         -> login
/// GET  /user/preferences/   -> get_preferences (requires auth)
/// PUT  /user/preferences/   -> put_preferences (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/", post(users::register))
        .route("/user/login/", post(users::login))
        .route(
            "/user/preferences/",
            get(preferences::get_preferences).put(preferences::put_preferences),
        )
}
