//! Authentication route handlers.
//!
//! One page serves both the sign-in and the sign-up form (`?mode=`). Failed
//! submissions re-render the form with the adapter's message in a banner and
//! keep what the visitor typed, except the password.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use payetonkawa_core::User;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalAuth, SessionCart, clear_current_user, set_current_user};
use crate::routes::Layout;
use crate::services::auth::AuthError;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Which form the auth page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    /// Mode from the `mode` query value; anything but `signup` is sign-in.
    #[must_use]
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode {
            Some("signup") => Self::SignUp,
            _ => Self::SignIn,
        }
    }
}

/// A field of the auth forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
    Name,
}

impl AuthField {
    /// Field for an HTML input name. Unknown names yield `None`.
    #[must_use]
    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

/// Values typed into the auth form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFormData {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl AuthFormData {
    /// Store `value` in `field`.
    pub fn set(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
            AuthField::Name => self.name = value,
        }
    }

    /// Collect posted `(name, value)` pairs. Unknown inputs are ignored and a
    /// repeated input keeps its last value.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut data = Self::default();
        for (name, value) in pairs {
            match AuthField::from_input_name(&name) {
                Some(field) => data.set(field, value),
                None => tracing::debug!(input = %name, "Ignoring unknown auth form input"),
            }
        }
        data
    }
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for the auth page.
#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    pub mode: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Sign-in / sign-up page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/index.html")]
pub struct AuthTemplate {
    pub layout: Layout,
    pub sign_up: bool,
    pub error: Option<String>,
    pub email: String,
    pub name: String,
}

impl AuthTemplate {
    fn new(layout: Layout, mode: AuthMode) -> Self {
        Self {
            layout,
            sign_up: mode == AuthMode::SignUp,
            error: None,
            email: String::new(),
            name: String::new(),
        }
    }

    fn with_error(mut self, form: &AuthFormData, error: &AuthError) -> Self {
        self.error = Some(error.to_string());
        self.email = form.email.clone();
        self.name = form.name.clone();
        self
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the auth page. Signed-in visitors are sent home.
#[instrument(skip_all)]
pub async fn page(
    OptionalAuth(user): OptionalAuth,
    cart: SessionCart,
    Query(query): Query<AuthQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }

    let mode = AuthMode::from_query(query.mode.as_deref());
    AuthTemplate::new(Layout::new(None, cart.cart()), mode).into_response()
}

/// Handle sign-in form submission.
#[instrument(skip_all)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    cart: SessionCart,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let form = AuthFormData::from_pairs(pairs);

    match state.auth().sign_in(&form.email, &form.password).await {
        Ok(user) => start_session(&session, &user).await,
        Err(e) => {
            tracing::warn!("Sign-in failed: {e}");
            Ok(AuthTemplate::new(Layout::new(None, cart.cart()), AuthMode::SignIn)
                .with_error(&form, &e)
                .into_response())
        }
    }
}

/// Handle sign-up form submission.
#[instrument(skip_all)]
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    cart: SessionCart,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let form = AuthFormData::from_pairs(pairs);

    match state
        .auth()
        .sign_up(&form.email, &form.password, &form.name)
        .await
    {
        Ok(user) => start_session(&session, &user).await,
        Err(e) => {
            tracing::warn!("Sign-up failed: {e}");
            Ok(AuthTemplate::new(Layout::new(None, cart.cart()), AuthMode::SignUp)
                .with_error(&form, &e)
                .into_response())
        }
    }
}

/// Handle sign-out. The cart is emptied along with the user.
#[instrument(skip_all)]
pub async fn sign_out(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
    mut cart: SessionCart,
) -> Result<Redirect> {
    if let Some(user) = user {
        let result = state.auth().sign_out(&user).await;
        if let Err(e) = result {
            tracing::warn!(user_id = %user.id, "Auth adapter sign-out failed: {e}");
        }
    }

    clear_current_user(&session).await?;
    cart.clear().await?;
    clear_sentry_user();

    Ok(Redirect::to("/"))
}

async fn start_session(session: &Session, user: &User) -> Result<Response> {
    set_current_user(session, user).await?;
    set_sentry_user(&user.id, Some(user.email.as_str()));
    Ok(Redirect::to("/").into_response())
}
