//! Client error taxonomy shared by the browser and server API clients.
//!
//! # Design
//! - Classification of a failed response is pure: status code plus raw body bytes.
//! - The side effect a failure should trigger is decided here too, so both clients
//!   agree on when a 401 ends the session.
use pokedex_api_models::ErrorBody;
use thiserror::Error;

/// Upstream login endpoint; a 401 here is a credential error, not an expired session.
pub const LOGIN_ENDPOINT: &str = "/auth/login";
/// Inline message shown when the login call is rejected.
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "The username or password you entered is incorrect. Please try again.";
/// Fallback message for a 401 without a readable body.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Failure raised by an API call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The upstream rejected the session or credentials.
    #[error("unauthorized")]
    Unauthorized {
        /// Server-provided message.
        message: String,
    },
    /// Non-2xx response other than 401.
    #[error("request failed")]
    Network {
        /// HTTP status code.
        status: u16,
        /// Server-provided message or `API Error: <status>`.
        message: String,
    },
    /// The request never produced a usable response.
    #[error("transport failure")]
    Transport {
        /// Underlying failure description.
        message: String,
    },
    /// A required form field was left empty.
    #[error("validation failed")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Convenience alias for client results.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Build a transport failure from any displayable error.
    #[must_use]
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }

    /// Message suitable for an inline alert.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { message }
            | Self::Network { message, .. }
            | Self::Transport { message } => message.clone(),
            Self::Validation { field } => format!("Please fill in the {field} field."),
        }
    }
}

/// Map a non-2xx response to a [`ClientError`].
#[must_use]
pub fn classify_failure(status: u16, body: &[u8]) -> ClientError {
    let parsed = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|payload| payload.error)
        .filter(|message| !message.trim().is_empty());
    if status == 401 {
        ClientError::Unauthorized {
            message: parsed.unwrap_or_else(|| UNAUTHORIZED_MESSAGE.to_string()),
        }
    } else {
        ClientError::Network {
            status,
            message: parsed.unwrap_or_else(|| format!("API Error: {status}")),
        }
    }
}

/// Side effect a failure should have on the browser session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureEffect {
    /// Surface the error only.
    None,
    /// Drop the token but stay on the current page.
    ClearSession,
    /// Drop the token and hard-navigate to the login page.
    ClearSessionAndRedirect,
}

/// Decide the session side effect of `err` raised by a call to `endpoint`.
#[must_use]
pub fn failure_effect(err: &ClientError, endpoint: &str) -> FailureEffect {
    match err {
        ClientError::Unauthorized { .. } if is_login_endpoint(endpoint) => {
            FailureEffect::ClearSession
        }
        ClientError::Unauthorized { .. } => FailureEffect::ClearSessionAndRedirect,
        _ => FailureEffect::None,
    }
}

/// Message the login form shows for a failed submission.
#[must_use]
pub fn login_failure_message(err: &ClientError) -> String {
    match err {
        ClientError::Unauthorized { .. } => INVALID_CREDENTIALS_MESSAGE.to_string(),
        other => other.user_message(),
    }
}

fn is_login_endpoint(endpoint: &str) -> bool {
    let path = endpoint.split('?').next().unwrap_or(endpoint);
    path == LOGIN_ENDPOINT || path.ends_with(LOGIN_ENDPOINT)
}
