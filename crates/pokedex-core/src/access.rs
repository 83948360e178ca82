//! Route access policy shared by the edge guard, the server render and the client.
//!
//! # Design
//! - One pure decision function so the three enforcement points cannot drift apart.
//! - Session state is derived from token presence only; no expiry or signature checks.

/// Whether the caller currently holds a session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No usable token.
    Anonymous,
    /// A non-empty token is present.
    Authenticated,
}

impl SessionState {
    /// Derive the state from an optional token value.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            Some(value) if !value.is_empty() => Self::Authenticated,
            _ => Self::Anonymous,
        }
    }

    /// Convenience check used by UI guards.
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Outcome of evaluating a navigation against the policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// Continue to the requested path.
    Allow,
    /// Send the caller to the login page.
    RedirectToLogin,
    /// Send the caller to the protected home page.
    RedirectToHome,
}

/// Protected prefix and login path configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessPolicy {
    /// Paths equal to or nested below this prefix require a session.
    pub protected_prefix: &'static str,
    /// Login page path.
    pub login_path: &'static str,
    /// Landing page for authenticated users.
    pub home_path: &'static str,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl AccessPolicy {
    /// `/pokemon` protected, `/login` as the login page, `/pokemon` as home.
    pub const DEFAULT: Self = Self {
        protected_prefix: "/pokemon",
        login_path: "/login",
        home_path: "/pokemon",
    };

    /// Whether `path` sits under the protected prefix (segment aware).
    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        path == self.protected_prefix
            || path
                .strip_prefix(self.protected_prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Whether the guard should inspect `path` at all.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        path == self.login_path || self.is_protected(path)
    }

    /// Evaluate a navigation to `path` for the given session state.
    #[must_use]
    pub fn evaluate(&self, path: &str, session: SessionState) -> AccessDecision {
        match session {
            SessionState::Anonymous if self.is_protected(path) => AccessDecision::RedirectToLogin,
            SessionState::Authenticated if path == self.login_path => {
                AccessDecision::RedirectToHome
            }
            _ => AccessDecision::Allow,
        }
    }

    /// Redirect target for a decision, `None` when the navigation is allowed.
    #[must_use]
    pub const fn location(&self, decision: AccessDecision) -> Option<&'static str> {
        match decision {
            AccessDecision::Allow => None,
            AccessDecision::RedirectToLogin => Some(self.login_path),
            AccessDecision::RedirectToHome => Some(self.home_path),
        }
    }

    /// Where the site root sends a visitor.
    #[must_use]
    pub const fn root_target(&self, session: SessionState) -> &'static str {
        match session {
            SessionState::Authenticated => self.home_path,
            SessionState::Anonymous => self.login_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: AccessPolicy = AccessPolicy::DEFAULT;

    #[test]
    fn session_state_requires_non_blank_token() {
        assert_eq!(SessionState::from_token(None), SessionState::Anonymous);
        assert_eq!(SessionState::from_token(Some("  ")), SessionState::Anonymous);
        assert_eq!(
            SessionState::from_token(Some("abc")),
            SessionState::Authenticated
        );
    }

    #[test]
    fn anonymous_visitors_are_sent_to_login_from_protected_paths() {
        for path in ["/pokemon", "/pokemon/25", "/pokemon/25/extra"] {
            let decision = POLICY.evaluate(path, SessionState::Anonymous);
            assert_eq!(decision, AccessDecision::RedirectToLogin, "{path}");
            assert_eq!(POLICY.location(decision), Some("/login"));
        }
    }

    #[test]
    fn authenticated_visitors_skip_login() {
        let decision = POLICY.evaluate("/login", SessionState::Authenticated);
        assert_eq!(decision, AccessDecision::RedirectToHome);
        assert_eq!(POLICY.location(decision), Some("/pokemon"));
    }

    #[test]
    fn other_combinations_are_allowed() {
        assert_eq!(
            POLICY.evaluate("/login", SessionState::Anonymous),
            AccessDecision::Allow
        );
        assert_eq!(
            POLICY.evaluate("/pokemon/7", SessionState::Authenticated),
            AccessDecision::Allow
        );
        assert_eq!(
            POLICY.evaluate("/pokemonx", SessionState::Anonymous),
            AccessDecision::Allow
        );
        assert_eq!(
            POLICY.evaluate("/favicon.ico", SessionState::Anonymous),
            AccessDecision::Allow
        );
    }

    #[test]
    fn matcher_covers_login_and_protected_tree_only() {
        assert!(POLICY.matches("/login"));
        assert!(POLICY.matches("/pokemon"));
        assert!(POLICY.matches("/pokemon/1"));
        assert!(!POLICY.matches("/"));
        assert!(!POLICY.matches("/assets/app.wasm"));
    }

    #[test]
    fn root_target_follows_session() {
        assert_eq!(POLICY.root_target(SessionState::Authenticated), "/pokemon");
        assert_eq!(POLICY.root_target(SessionState::Anonymous), "/login");
    }
}
