//! Session-backed cart extractor.
//!
//! Handlers never touch the cart key in the session directly. They extract a
//! [`SessionCart`], call one of its operations, and the updated cart is
//! written back before the operation returns.

use axum::{extract::FromRequestParts, http::request::Parts};
use payetonkawa_core::{Cart, Product};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::session_keys;

/// The visitor's cart, loaded from the session.
pub struct SessionCart {
    session: Session,
    cart: Cart,
}

impl SessionCart {
    /// Load the cart stored in `session`, or an empty one.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(session: Session) -> Result<Self, AppError> {
        let cart = session
            .get::<Cart>(session_keys::CART)
            .await?
            .unwrap_or_default();

        Ok(Self { session, cart })
    }

    /// Current cart contents.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add `quantity` units of `product`, clamped to stock.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), AppError> {
        self.cart.add_item(product, quantity);
        self.save().await
    }

    /// Set the quantity of a line, clamped to `[0, stock]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn update_quantity(&mut self, product_id: &str, quantity: i64) -> Result<(), AppError> {
        self.cart.update_quantity(product_id, quantity);
        self.save().await
    }

    /// Remove the line for `product_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn remove_item(&mut self, product_id: &str) -> Result<(), AppError> {
        self.cart.remove_item(product_id);
        self.save().await
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn clear(&mut self) -> Result<(), AppError> {
        self.cart.clear();
        self.save().await
    }

    async fn save(&self) -> Result<(), AppError> {
        self.session.insert(session_keys::CART, &self.cart).await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for SessionCart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        Self::load(session).await
    }
}
