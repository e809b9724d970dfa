//! Authentication error types.
//!
//! Messages are shown verbatim in the auth form banner, so they are written
//! for customers.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("Adresse email invalide")]
    InvalidEmail(#[from] payetonkawa_core::EmailError),

    /// Invalid credentials (wrong password or unknown account).
    #[error("Email ou mot de passe incorrect")]
    InvalidCredentials,

    /// An account already uses this email.
    #[error("Un compte existe déjà avec cette adresse email")]
    UserAlreadyExists,

    /// Password too short.
    #[error("Le mot de passe doit contenir au moins {min} caractères")]
    WeakPassword {
        /// Minimum accepted length.
        min: usize,
    },

    /// Sign-up without a display name.
    #[error("Veuillez indiquer votre nom")]
    MissingName,

    /// Password hashing error.
    #[error("Une erreur est survenue, veuillez réessayer")]
    PasswordHash,
}
