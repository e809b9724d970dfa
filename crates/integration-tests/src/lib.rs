//! Integration tests for the PayeTonKawa storefront.
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`,
//! so no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p payetonkawa-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `health` - Liveness endpoint and request ids
//! - `products` - Catalog listing, filters and product pages
//! - `cart` - Session cart, clamping and the HTMX badge
//! - `auth` - Sign-up, sign-in, sign-out, checkout and order history

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use payetonkawa_core::Catalog;
use payetonkawa_storefront::config::StorefrontConfig;
use payetonkawa_storefront::state::AppState;
use tower::ServiceExt;

/// A storefront router plus the session cookie of one visitor.
///
/// Every `Set-Cookie` answer replaces the stored cookie, so sign-in (which
/// cycles the session id) is followed transparently.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Target of a redirect, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Whether this is a redirect to `path`.
    #[must_use]
    pub fn redirects_to(&self, path: &str) -> bool {
        self.status.is_redirection() && self.location() == Some(path)
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Storefront with the built-in catalog and a fresh visitor.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Catalog::sample())
    }

    /// Storefront with a custom catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        let state = AppState::new(StorefrontConfig::default(), catalog);
        Self {
            router: payetonkawa_storefront::app(state),
            cookie: None,
        }
    }

    /// A second visitor on the same storefront, without a session.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// Whether the visitor holds a session cookie.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    /// `GET uri`.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty());
        self.send(request.expect("valid request")).await
    }

    /// `POST uri` with a url-encoded form.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(fields)));
        self.send(request.expect("valid request")).await
    }

    /// `POST uri` with a url-encoded form, as sent by HTMX.
    pub async fn htmx_post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("HX-Request", "true")
            .body(Body::from(encode_form(fields)));
        self.send(request.expect("valid request")).await
    }

    /// Sign up a new account; the visitor is then signed in.
    pub async fn sign_up(&mut self, email: &str, password: &str, name: &str) -> TestResponse {
        self.post_form(
            "/auth/sign-up",
            &[("email", email), ("password", password), ("name", name)],
        )
        .await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
        {
            self.cookie = Some(cookie.to_owned());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}
