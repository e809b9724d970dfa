//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, only when a DSN is configured)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions with in-memory store)
//!
//! The extractors in [`auth`] and [`cart`] read the session installed by the
//! session layer.

pub mod auth;
pub mod cart;
pub mod request_id;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, clear_current_user, set_current_user};
pub use cart::SessionCart;
pub use request_id::request_id_middleware;
pub use session::create_session_layer;
