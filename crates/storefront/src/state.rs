//! Application state shared across handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use payetonkawa_core::{Catalog, CatalogError};

use crate::config::StorefrontConfig;
use crate::services::auth::{AuthAdapter, InMemoryAuth};
use crate::services::orders::OrderBook;

/// Error loading the catalog file named by `STOREFRONT_CATALOG_PATH`.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        source: CatalogError,
    },
}

/// Load the catalog from `path`, or the built-in coffees when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    let Some(path) = path else {
        return Ok(Catalog::sample());
    };

    let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Catalog::from_json(&json).map_err(|source| CatalogLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the auth adapter, the order book and configuration. The cart is
/// not here: it lives in each visitor's session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    auth: Arc<dyn AuthAdapter>,
    orders: OrderBook,
}

impl AppState {
    /// Create a new application state backed by the in-memory auth adapter.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self::with_auth(config, catalog, Arc::new(InMemoryAuth::new()))
    }

    /// Create a new application state with a specific auth adapter.
    #[must_use]
    pub fn with_auth(
        config: StorefrontConfig,
        catalog: Catalog,
        auth: Arc<dyn AuthAdapter>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                auth,
                orders: OrderBook::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the auth adapter.
    #[must_use]
    pub fn auth(&self) -> &dyn AuthAdapter {
        self.inner.auth.as_ref()
    }

    /// Get a reference to the order book.
    #[must_use]
    pub fn orders(&self) -> &OrderBook {
        &self.inner.orders
    }
}
