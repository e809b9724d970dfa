//! Session-related types.
//!
//! The session holds two values: the signed-in [`User`] (as returned by the
//! auth adapter) and the shopping [`Cart`]. Both are JSON-encoded by
//! tower-sessions and vanish with the in-memory store on restart.
//!
//! [`User`]: payetonkawa_core::User
//! [`Cart`]: payetonkawa_core::Cart

/// Session keys.
pub mod keys {
    /// Key for storing the current signed-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing the shopping cart.
    pub const CART: &str = "cart";
}
