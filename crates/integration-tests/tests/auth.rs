//! Integration tests for accounts, checkout and order history.

use axum::http::StatusCode;
use payetonkawa_integration_tests::TestApp;

// ============================================================================
// Sign-up & Sign-in
// ============================================================================

#[tokio::test]
async fn test_auth_page_modes() {
    let mut app = TestApp::new();

    let resp = app.get("/auth").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains(r#"action="/auth/sign-in""#));

    let resp = app.get("/auth?mode=signup").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains(r#"action="/auth/sign-up""#));
}

#[tokio::test]
async fn test_sign_up_shows_name_in_header() {
    let mut app = TestApp::new();

    let resp = app.sign_up("ada@kawa.fr", "secret1", "Ada Lovelace").await;
    assert!(resp.redirects_to("/"));

    let resp = app.get("/").await;
    assert!(resp.body.contains("Ada Lovelace"));
    assert!(resp.body.contains("Mes commandes"));
    assert!(!resp.body.contains("Se connecter"));

    let resp = app.get("/auth").await;
    assert!(resp.redirects_to("/"));
}

#[tokio::test]
async fn test_sign_up_rejects_short_password() {
    let mut app = TestApp::new();
    let resp = app.sign_up("ada@kawa.fr", "abc", "Ada").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("au moins 6 caractères"));
    assert!(resp.body.contains("ada@kawa.fr"));
}

#[tokio::test]
async fn test_duplicate_sign_up() {
    let mut app = TestApp::new();
    app.sign_up("ada@kawa.fr", "secret1", "Ada").await;

    let mut other = app.new_visitor();
    let resp = other.sign_up("ADA@kawa.fr", "secret2", "Imposter").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Un compte existe déjà avec cette adresse email"));
}

#[tokio::test]
async fn test_sign_in_after_sign_out() {
    let mut app = TestApp::new();
    app.sign_up("grace@kawa.fr", "hopper1", "Grace").await;

    let resp = app.post_form("/auth/sign-out", &[]).await;
    assert!(resp.redirects_to("/"));
    let resp = app.get("/").await;
    assert!(resp.body.contains("Se connecter"));

    let resp = app
        .post_form(
            "/auth/sign-in",
            &[("email", "grace@kawa.fr"), ("password", "wrong-one")],
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Email ou mot de passe incorrect"));

    let resp = app
        .post_form(
            "/auth/sign-in",
            &[("email", "grace@kawa.fr"), ("password", "hopper1")],
        )
        .await;
    assert!(resp.redirects_to("/"));
    let resp = app.get("/").await;
    assert!(resp.body.contains("Grace"));
}

#[tokio::test]
async fn test_sign_out_empties_cart() {
    let mut app = TestApp::new();
    app.sign_up("ada@kawa.fr", "secret1", "Ada").await;
    app.post_form("/cart/add", &[("product_id", "1")]).await;

    app.post_form("/auth/sign-out", &[]).await;

    let resp = app.get("/cart/count").await;
    assert!(!resp.body.contains(r#"class="badge""#));
}

// ============================================================================
// Checkout & Orders
// ============================================================================

#[tokio::test]
async fn test_checkout_requires_sign_in() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("product_id", "2")]).await;

    let resp = app.post_form("/cart/checkout", &[]).await;
    assert!(resp.redirects_to("/auth"));

    let resp = app.get("/orders").await;
    assert!(resp.redirects_to("/auth"));
}

#[tokio::test]
async fn test_cart_survives_sign_up() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("product_id", "2"), ("quantity", "2")])
        .await;

    app.sign_up("ada@kawa.fr", "secret1", "Ada").await;

    let resp = app.get("/cart/count").await;
    assert!(resp.body.contains(r#"<span class="badge">2</span>"#));
}

#[tokio::test]
async fn test_checkout_places_order() {
    let mut app = TestApp::new();
    app.sign_up("ada@kawa.fr", "secret1", "Ada").await;
    app.post_form("/cart/add", &[("product_id", "2"), ("quantity", "2")])
        .await;

    let resp = app.post_form("/cart/checkout", &[]).await;
    assert!(resp.redirects_to("/orders"));

    let resp = app.get("/orders").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Guatemala Antigua"));
    assert!(resp.body.contains("53.00€"));

    let resp = app.get("/cart/count").await;
    assert!(!resp.body.contains(r#"class="badge""#));
}

#[tokio::test]
async fn test_checkout_with_empty_cart() {
    let mut app = TestApp::new();
    app.sign_up("ada@kawa.fr", "secret1", "Ada").await;

    let resp = app.post_form("/cart/checkout", &[]).await;
    assert!(resp.redirects_to("/cart"));
}

#[tokio::test]
async fn test_orders_are_per_user() {
    let mut ada = TestApp::new();
    ada.sign_up("ada@kawa.fr", "secret1", "Ada").await;
    ada.post_form("/cart/add", &[("product_id", "5")]).await;
    ada.post_form("/cart/checkout", &[]).await;

    let mut grace = ada.new_visitor();
    grace.sign_up("grace@kawa.fr", "hopper1", "Grace").await;
    let resp = grace.get("/orders").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(!resp.body.contains("Kenya AA"));
}
