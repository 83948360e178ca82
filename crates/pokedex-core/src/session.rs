//! Session cookie policy: name, lifetime, attributes, and parsing.
//!
//! The same header strings are used by `document.cookie` in the browser and by
//! `Set-Cookie`/`Cookie` headers on the server.

/// Cookie holding the bearer token.
pub const SESSION_COOKIE: &str = "auth-token";
/// Session lifetime: one day.
pub const SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Cookie string that stores `token` for one day with strict same-site rules.
#[must_use]
pub fn session_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={}; Path=/; Max-Age={SESSION_TTL_SECS}; SameSite=Strict",
        urlencoding::encode(token)
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Cookie string that expires the session immediately.
#[must_use]
pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; SameSite=Strict");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Extract a named cookie value from a `Cookie` header or `document.cookie` string.
#[must_use]
pub fn cookie_value(raw: &str, needle: &str) -> Option<String> {
    for entry in raw.split(';') {
        let mut parts = entry.splitn(2, '=');
        let name = parts.next().map(str::trim).unwrap_or_default();
        if name != needle {
            continue;
        }
        let value = parts.next().map(str::trim)?.trim_matches('"');
        if value.is_empty() {
            return None;
        }
        return Some(
            urlencoding::decode(value).map_or_else(|_| value.to_string(), |v| v.into_owned()),
        );
    }
    None
}

/// Session token carried by a cookie string, if any.
#[must_use]
pub fn token_from_cookies(raw: &str) -> Option<String> {
    cookie_value(raw, SESSION_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_carries_strict_attributes() {
        assert_eq!(
            session_cookie("abc", false),
            "auth-token=abc; Path=/; Max-Age=86400; SameSite=Strict"
        );
        assert!(session_cookie("abc", true).ends_with("; Secure"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie(false);
        assert!(cookie.starts_with("auth-token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let raw = "theme=dark; auth-token=tok%2Fen; other=1";
        assert_eq!(token_from_cookies(raw).as_deref(), Some("tok/en"));
    }

    #[test]
    fn missing_or_empty_token_yields_none() {
        assert_eq!(token_from_cookies(""), None);
        assert_eq!(token_from_cookies("auth-token="), None);
        assert_eq!(token_from_cookies("x-auth-token=abc"), None);
    }

    #[test]
    fn encoded_token_round_trips_through_cookie_string() {
        let token = "a b;c";
        let cookie = session_cookie(token, false);
        let header = cookie.split(';').next().unwrap_or_default();
        assert_eq!(token_from_cookies(header).as_deref(), Some(token));
    }
}
