//! Integration tests for token issuance and bearer-token access

mod common;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::Value;

use common::fixtures;
use seclab_service::routes;
use seclab_service::security::{token, verify_password, CsrfSigner};

#[actix_web::test]
async fn token_then_me_roundtrip() {
    let pool = fixtures::create_test_pool().await;
    let settings = fixtures::test_settings();
    let signer = CsrfSigner::new(settings.csrf.secret.clone(), settings.csrf.ttl_secs);
    let auth = settings.auth.clone();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(settings))
            .app_data(web::Data::new(signer))
            .configure(|cfg| routes::configure_routes(cfg, &auth)),
    )
    .await;

    fixtures::seed_user(&pool, "alice", "alice@example.com", "super secret pw").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/token")
            .set_form(&[("username", "alice"), ("password", "super secret pw")])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["expires_in"], 1800);
    let access_token = body["access_token"].as_str().expect("token").to_string();
    assert!(!access_token.is_empty());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/users/me")
            .insert_header(("Authorization", format!("Bearer {}", access_token)))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "alice");
    assert!(body.get("hashed_password").is_none());
}

#[actix_web::test]
async fn wrong_password_returns_401() {
    let pool = fixtures::create_test_pool().await;
    let settings = fixtures::test_settings();
    let signer = CsrfSigner::new(settings.csrf.secret.clone(), settings.csrf.ttl_secs);
    let auth = settings.auth.clone();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(settings))
            .app_data(web::Data::new(signer))
            .configure(|cfg| routes::configure_routes(cfg, &auth)),
    )
    .await;

    fixtures::seed_user(&pool, "alice", "alice@example.com", "super secret pw").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/token")
            .set_form(&[("username", "alice"), ("password", "wrong password")])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Incorrect username or password");
}

#[actix_web::test]
async fn unknown_user_returns_the_same_401_message() {
    let pool = fixtures::create_test_pool().await;
    let settings = fixtures::test_settings();
    let signer = CsrfSigner::new(settings.csrf.secret.clone(), settings.csrf.ttl_secs);
    let auth = settings.auth.clone();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(settings))
            .app_data(web::Data::new(signer))
            .configure(|cfg| routes::configure_routes(cfg, &auth)),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/token")
            .set_form(&[("username", "nobody"), ("password", "whatever password")])
            .to_request(),
    )
    .await;

    // Same message as a wrong password: the response must not reveal
    // whether the account exists.
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Incorrect username or password");
}

#[actix_web::test]
async fn me_without_token_returns_401() {
    let pool = fixtures::create_test_pool().await;
    let settings = fixtures::test_settings();
    let signer = CsrfSigner::new(settings.csrf.secret.clone(), settings.csrf.ttl_secs);
    let auth = settings.auth.clone();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(settings))
            .app_data(web::Data::new(signer))
            .configure(|cfg| routes::configure_routes(cfg, &auth)),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/users/me").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn me_with_tampered_token_returns_401() {
    let pool = fixtures::create_test_pool().await;
    let settings = fixtures::test_settings();
    let signer = CsrfSigner::new(settings.csrf.secret.clone(), settings.csrf.ttl_secs);
    let auth = settings.auth.clone();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(settings))
            .app_data(web::Data::new(signer))
            .configure(|cfg| routes::configure_routes(cfg, &auth)),
    )
    .await;

    fixtures::seed_user(&pool, "alice", "alice@example.com", "super secret pw").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/token")
            .set_form(&[("username", "alice"), ("password", "super secret pw")])
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    let access_token = body["access_token"].as_str().expect("token").to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/users/me")
            .insert_header(("Authorization", format!("Bearer {}x", access_token)))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn me_with_expired_token_returns_401() {
    let pool = fixtures::create_test_pool().await;
    let settings = fixtures::test_settings();
    let signer = CsrfSigner::new(settings.csrf.secret.clone(), settings.csrf.ttl_secs);
    let auth = settings.auth.clone();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(settings))
            .app_data(web::Data::new(signer))
            .configure(|cfg| routes::configure_routes(cfg, &auth)),
    )
    .await;

    let user = fixtures::seed_user(&pool, "alice", "alice@example.com", "super secret pw").await;

    // Issued 120 seconds in the past, beyond the decoder's 60s leeway.
    let expired = token::issue_access_token(&auth.jwt_secret, user.id, -120).expect("sign token");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/users/me")
            .insert_header(("Authorization", format!("Bearer {}", expired)))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn registration_stores_argon2_hash_not_plaintext() {
    let pool = fixtures::create_test_pool().await;
    let settings = fixtures::test_settings();
    let signer = CsrfSigner::new(settings.csrf.secret.clone(), settings.csrf.ttl_secs);
    let auth = settings.auth.clone();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(settings))
            .app_data(web::Data::new(signer))
            .configure(|cfg| routes::configure_routes(cfg, &auth)),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(serde_json::json!({
                "name": "carol",
                "email": "carol@example.com",
                "password": "a very good password"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let row: (String,) = sqlx::query_as("SELECT hashed_password FROM users WHERE email = ?")
        .bind("carol@example.com")
        .fetch_one(&pool)
        .await
        .expect("fetch hash");

    assert!(row.0.starts_with("$argon2"));
    assert_ne!(row.0, "a very good password");
    assert!(verify_password("a very good password", &row.0).is_ok());
}
