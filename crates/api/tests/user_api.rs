//! HTTP-level integration tests for registration, login, and token auth.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get_auth, post_json, token_for};
use pawmatch_db::repositories::UserRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn register_creates_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "username": "fern", "password": "hunter2hunter2" });
    let response = post_json(app, "/api/user/", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["username"], "fern");
    // The password must never be echoed, hashed or otherwise.
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());

    // The stored hash is Argon2id, not plaintext.
    let user = UserRepo::find_by_id(&pool, json["id"].as_i64().unwrap())
        .await
        .unwrap()
        .expect("registered user must be stored");
    assert_eq!(user.username, "fern");
    assert!(user.password_hash.starts_with("$argon2id$"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_duplicate_username_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "fern", "password": "hunter2hunter2" });
    let response = post_json(app, "/api/user/", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/user/", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_short_password_names_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "username": "fern", "password": "short" });
    let response = post_json(app, "/api/user/", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["password"].is_array());

    // Nothing was stored.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_empty_username_and_short_password_both_named(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "  ", "password": "nope" });
    let response = post_json(app, "/api/user/", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["username"].is_array());
    assert!(json["fields"]["password"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_working_token(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "scout").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "scout", "password": password });
    let response = post_json(app, "/api/user/login/", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let token = json["token"].as_str().expect("response must contain token");

    // The issued token grants access to an authenticated endpoint.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/user/preferences/", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_wrong_password_unauthorized(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "scout").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "scout", "password": "incorrect_password" });
    let response = post_json(app, "/api/user/login/", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_nonexistent_user_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever_pw" });
    let response = post_json(app, "/api/user/login/", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_token_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/user/preferences/").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn garbage_token_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/user/preferences/", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_endpoint_reports_ok(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn token_helper_matches_login_path(pool: PgPool) {
    // The fixture token (signed directly with the test secret) must be
    // accepted exactly like a token from the login endpoint.
    let (user, _password) = create_test_user(&pool, "scout").await;
    let token = token_for(user.id);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/user/preferences/", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
