//! Login form state and the pure half of the login flow.
//!
//! # Design
//! - Required fields are checked before any request is built.
//! - The slice records outcomes only; cookie writes happen in `session`.

use pokedex_api_models::LoginRequest;
use pokedex_core::error::login_failure_message;
use pokedex_core::{ClientError, ClientResult};

/// Login form state. Session presence is read from the cookie, never cached here.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthSlice {
    /// A login request is outstanding.
    pub busy: bool,
    /// Inline alert text.
    pub error: Option<String>,
}

impl AuthSlice {
    /// Enter the busy state for a new submission.
    pub fn begin_login(&mut self) {
        self.busy = true;
        self.error = None;
    }

    /// Record the result of a login attempt.
    pub fn finish_login(&mut self, outcome: &ClientResult<()>) {
        self.busy = false;
        match outcome {
            Ok(()) => self.error = None,
            Err(err) => self.error = Some(login_failure_message(err)),
        }
    }

    /// Label of the submit button.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.busy { "Logging in..." } else { "Login" }
    }
}

/// Build a login request, rejecting empty fields.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] naming the first blank field.
pub fn validate_credentials(username: &str, password: &str) -> ClientResult<LoginRequest> {
    if username.trim().is_empty() {
        return Err(ClientError::Validation { field: "username" });
    }
    if password.is_empty() {
        return Err(ClientError::Validation { field: "password" });
    }
    Ok(LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    })
}
