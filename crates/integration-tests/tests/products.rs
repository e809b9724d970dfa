//! Integration tests for the home page, catalog listing and product pages.

use axum::http::StatusCode;
use payetonkawa_integration_tests::TestApp;

const ALL_NAMES: [&str; 6] = [
    "Éthiopie Sidamo",
    "Guatemala Antigua",
    "Colombie Huila",
    "Brésil Santos",
    "Kenya AA",
    "Costa Rica Tarrazú",
];

// ============================================================================
// Home
// ============================================================================

#[tokio::test]
async fn test_home_shows_featured_products() {
    let mut app = TestApp::new();
    let resp = app.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Éthiopie Sidamo"));
    assert!(resp.body.contains("Guatemala Antigua"));
    assert!(resp.body.contains("Colombie Huila"));
    assert!(!resp.body.contains("Kenya AA"));
    assert!(resp.body.contains("Se connecter"));
}

// ============================================================================
// Listing & Filters
// ============================================================================

#[tokio::test]
async fn test_products_lists_whole_catalog() {
    let mut app = TestApp::new();
    let resp = app.get("/products").await;

    assert_eq!(resp.status, StatusCode::OK);
    for name in ALL_NAMES {
        assert!(resp.body.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn test_search_matches_tasting_notes_case_insensitively() {
    let mut app = TestApp::new();
    let resp = app.get("/products?q=CHOCOLAT").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Guatemala Antigua"));
    assert!(resp.body.contains("Brésil Santos"));
    assert!(!resp.body.contains("Éthiopie Sidamo"));
    assert!(!resp.body.contains("Kenya AA"));
}

#[tokio::test]
async fn test_filters_combine() {
    let mut app = TestApp::new();
    let resp = app.get("/products?roast=light&price=25-30").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Kenya AA"));
    assert!(!resp.body.contains("Éthiopie Sidamo"));
    assert!(!resp.body.contains("Guatemala Antigua"));
}

#[tokio::test]
async fn test_origin_filter_is_exact() {
    let mut app = TestApp::new();
    let resp = app.get("/products?origin=Br%C3%A9sil").await;

    assert!(resp.body.contains("Brésil Santos"));
    assert!(!resp.body.contains("Colombie Huila"));
}

#[tokio::test]
async fn test_unparseable_filters_are_ignored() {
    let mut app = TestApp::new();
    let resp = app.get("/products?roast=burnt&price=cheap").await;

    assert_eq!(resp.status, StatusCode::OK);
    for name in ALL_NAMES {
        assert!(resp.body.contains(name), "missing {name}");
    }
}

// ============================================================================
// Product Pages
// ============================================================================

#[tokio::test]
async fn test_product_page() {
    let mut app = TestApp::new();
    let resp = app.get("/product/5").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Kenya AA"));
    assert!(resp.body.contains("28.90€"));
    assert!(resp.body.contains("Acidité vive"));
}

#[tokio::test]
async fn test_unknown_product_is_404() {
    let mut app = TestApp::new();
    let resp = app.get("/product/99").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert!(resp.body.contains("Produit non trouvé"));
}
