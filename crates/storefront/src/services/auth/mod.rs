//! Authentication service.
//!
//! The storefront talks to accounts only through the [`AuthAdapter`] trait.
//! [`InMemoryAuth`] is the bundled implementation: accounts live in a map
//! keyed by normalised email, with Argon2id password hashes, and are lost on
//! restart.

mod error;

pub use error::AuthError;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;

use payetonkawa_core::{Email, User, UserId};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Boundary to the account provider.
///
/// Every failure carries a customer-readable message (its `Display`).
#[async_trait]
pub trait AuthAdapter: Send + Sync {
    /// Check credentials and return the matching user.
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Create an account and return the new user.
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<User, AuthError>;

    /// End the provider-side session of `user`.
    async fn sign_out(&self, user: &User) -> Result<(), AuthError>;
}

struct Account {
    user: User,
    password_hash: String,
}

/// Process-local account store.
#[derive(Default)]
pub struct InMemoryAuth {
    accounts: RwLock<HashMap<Email, Account>>,
}

impl InMemoryAuth {
    /// Create an empty account store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.read().map_or(0, |accounts| accounts.len())
    }

    /// Whether no account is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AuthAdapter for InMemoryAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let (user, password_hash) = {
            let accounts = self.accounts.read().map_err(|_| AuthError::PasswordHash)?;
            let account = accounts.get(&email).ok_or(AuthError::InvalidCredentials)?;
            (account.user.clone(), account.password_hash.clone())
        };

        verify_password(password, &password_hash)?;

        tracing::info!(user_id = %user.id, "user signed in");
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::MissingName);
        }
        validate_password(password)?;

        let password_hash = hash_password(password)?;

        let mut accounts = self.accounts.write().map_err(|_| AuthError::PasswordHash)?;
        match accounts.entry(email.clone()) {
            Entry::Occupied(_) => Err(AuthError::UserAlreadyExists),
            Entry::Vacant(slot) => {
                let user = User {
                    id: UserId::generate(),
                    email,
                    name: name.to_owned(),
                };
                slot.insert(Account {
                    user: user.clone(),
                    password_hash,
                });
                tracing::info!(user_id = %user.id, "user signed up");
                Ok(user)
            }
        }
    }

    async fn sign_out(&self, user: &User) -> Result<(), AuthError> {
        tracing::info!(user_id = %user.id, "user signed out");
        Ok(())
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
