//! Route definitions for the `/dog` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::dogs;
use crate::state::AppState;

/// Routes mounted at `/dog`. All require auth.
///
/// ```text
/// POST /dog/                     -> create_dog
/// PUT  /dog/{pk}/{status}/       -> set_status
/// GET  /dog/{pk}/{status}/next/  -> next_dog
/// ```
///
/// `{status}` is one of `liked`, `disliked`, `undecided`; anything else
/// 404s in the handler, mirroring the original converter regex.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dog/", post(dogs::create_dog))
        .route("/dog/{pk}/{status}/", put(dogs::set_status))
        .route("/dog/{pk}/{status}/next/", get(dogs::next_dog))
}
