//! Integration tests for the session cart.

use axum::http::StatusCode;
use payetonkawa_integration_tests::TestApp;

fn badge(count: u32) -> String {
    format!(r#"<span class="badge">{count}</span>"#)
}

#[tokio::test]
async fn test_empty_cart() {
    let mut app = TestApp::new();
    let resp = app.get("/cart").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(!resp.body.contains(r#"class="badge""#));
}

#[tokio::test]
async fn test_add_redirects_and_updates_badge() {
    let mut app = TestApp::new();

    let resp = app
        .post_form("/cart/add", &[("product_id", "2"), ("quantity", "2")])
        .await;
    assert!(resp.redirects_to("/cart"));
    assert!(app.has_session());

    let resp = app.get("/cart/count").await;
    assert!(resp.body.contains(&badge(2)));

    let resp = app.get("/products").await;
    assert!(resp.body.contains(&badge(2)));

    let resp = app.get("/cart").await;
    assert!(resp.body.contains("Guatemala Antigua"));
    assert!(resp.body.contains("53.00€"));
}

#[tokio::test]
async fn test_add_returns_to_local_page() {
    let mut app = TestApp::new();

    let resp = app
        .post_form("/cart/add", &[("product_id", "1"), ("return_to", "/product/1")])
        .await;
    assert!(resp.redirects_to("/product/1"));

    let resp = app
        .post_form(
            "/cart/add",
            &[("product_id", "1"), ("return_to", "//evil.example")],
        )
        .await;
    assert!(resp.redirects_to("/cart"));
}

#[tokio::test]
async fn test_add_is_clamped_to_stock() {
    let mut app = TestApp::new();

    app.post_form("/cart/add", &[("product_id", "5"), ("quantity", "6")])
        .await;
    app.post_form("/cart/add", &[("product_id", "5"), ("quantity", "6")])
        .await;

    let resp = app.get("/cart/count").await;
    assert!(resp.body.contains(&badge(8)));

    let resp = app.get("/cart").await;
    assert!(resp.body.contains("231.20€"));
}

#[tokio::test]
async fn test_htmx_add_returns_badge_fragment() {
    let mut app = TestApp::new();
    let resp = app
        .htmx_post_form("/cart/add", &[("product_id", "3")])
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.headers.get("HX-Trigger").and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );
    assert!(resp.body.contains(r#"id="cart-count""#));
    assert!(resp.body.contains(&badge(1)));
    assert!(!resp.body.contains("<html"));
}

#[tokio::test]
async fn test_add_unknown_product_is_404() {
    let mut app = TestApp::new();
    let resp = app
        .post_form("/cart/add", &[("product_id", "99")])
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_and_remove() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("product_id", "1"), ("quantity", "3")])
        .await;
    app.post_form("/cart/add", &[("product_id", "4")]).await;

    let resp = app
        .post_form("/cart/update", &[("product_id", "1"), ("quantity", "100")])
        .await;
    assert!(resp.redirects_to("/cart"));
    let resp = app.get("/cart/count").await;
    assert!(resp.body.contains(&badge(16)));

    app.post_form("/cart/update", &[("product_id", "1"), ("quantity", "0")])
        .await;
    let resp = app.get("/cart/count").await;
    assert!(resp.body.contains(&badge(1)));

    let resp = app.post_form("/cart/remove", &[("product_id", "4")]).await;
    assert!(resp.redirects_to("/cart"));
    let resp = app.get("/cart/count").await;
    assert!(!resp.body.contains(r#"class="badge""#));
}

#[tokio::test]
async fn test_carts_are_per_visitor() {
    let mut alice = TestApp::new();
    alice
        .post_form("/cart/add", &[("product_id", "6")])
        .await;

    let mut bob = alice.new_visitor();
    let resp = bob.get("/cart/count").await;
    assert!(!resp.body.contains(r#"class="badge""#));

    let resp = alice.get("/cart/count").await;
    assert!(resp.body.contains(&badge(1)));
}

// ============================================================================
// Lenient Quantities
// ============================================================================

#[tokio::test]
async fn test_add_with_negative_quantity_adds_nothing() {
    let mut app = TestApp::new();
    let resp = app
        .post_form("/cart/add", &[("product_id", "1"), ("quantity", "-1")])
        .await;

    assert!(resp.redirects_to("/cart"));
    let resp = app.get("/cart/count").await;
    assert!(!resp.body.contains(r#"class="badge""#));
}

#[tokio::test]
async fn test_add_with_blank_quantity_adds_one() {
    let mut app = TestApp::new();
    let resp = app
        .post_form("/cart/add", &[("product_id", "1"), ("quantity", "")])
        .await;

    assert!(resp.redirects_to("/cart"));
    let resp = app.get("/cart/count").await;
    assert!(resp.body.contains(&badge(1)));
}

#[tokio::test]
async fn test_add_with_huge_quantity_is_clamped() {
    let mut app = TestApp::new();
    let resp = app
        .post_form(
            "/cart/add",
            &[("product_id", "1"), ("quantity", "99999999999999999999")],
        )
        .await;

    assert!(resp.redirects_to("/cart"));
    let resp = app.get("/cart/count").await;
    assert!(resp.body.contains(&badge(15)));
}

#[tokio::test]
async fn test_update_with_out_of_range_quantities() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("product_id", "5"), ("quantity", "2")])
        .await;

    for quantity in ["", "abc"] {
        let resp = app
            .post_form("/cart/update", &[("product_id", "5"), ("quantity", quantity)])
            .await;
        assert!(resp.redirects_to("/cart"), "quantity {quantity:?}");
        let resp = app.get("/cart/count").await;
        assert!(resp.body.contains(&badge(2)), "quantity {quantity:?}");
    }

    let resp = app
        .post_form(
            "/cart/update",
            &[("product_id", "5"), ("quantity", "99999999999999999999")],
        )
        .await;
    assert!(resp.redirects_to("/cart"));
    let resp = app.get("/cart/count").await;
    assert!(resp.body.contains(&badge(8)));

    let resp = app
        .post_form(
            "/cart/update",
            &[("product_id", "5"), ("quantity", "-99999999999999999999")],
        )
        .await;
    assert!(resp.redirects_to("/cart"));
    let resp = app.get("/cart/count").await;
    assert!(!resp.body.contains(r#"class="badge""#));
}

#[tokio::test]
async fn test_update_with_negative_quantity_removes_line() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("product_id", "3")]).await;

    let resp = app
        .post_form("/cart/update", &[("product_id", "3"), ("quantity", "-1")])
        .await;
    assert!(resp.redirects_to("/cart"));
    let resp = app.get("/cart/count").await;
    assert!(!resp.body.contains(r#"class="badge""#));
}
