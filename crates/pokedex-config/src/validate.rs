//! Parsing helpers for individual variables.

use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

use crate::defaults::MAX_UPSTREAM_TIMEOUT_SECS;
use crate::error::{ConfigError, ConfigResult};
use crate::model::{DeploymentEnv, LogFormatSetting};

pub(crate) fn parse_bind_addr(field: &'static str, raw: &str) -> ConfigResult<SocketAddr> {
    raw.trim()
        .parse::<SocketAddr>()
        .map_err(|_| ConfigError::InvalidField {
            field,
            value: raw.to_string(),
            reason: "expected host:port socket address",
        })
}

pub(crate) fn parse_base_url(field: &'static str, raw: &str) -> ConfigResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidField {
        field,
        value: raw.to_string(),
        reason: "expected absolute URL",
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidField {
            field,
            value: raw.to_string(),
            reason: "scheme must be http or https",
        });
    }
    Ok(url)
}

pub(crate) fn parse_environment(field: &'static str, raw: &str) -> ConfigResult<DeploymentEnv> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "production" | "prod" => Ok(DeploymentEnv::Production),
        "development" | "dev" | "test" | "staging" => Ok(DeploymentEnv::Development),
        _ => Err(ConfigError::InvalidField {
            field,
            value: raw.to_string(),
            reason: "expected development or production",
        }),
    }
}

pub(crate) fn parse_log_format(field: &'static str, raw: &str) -> ConfigResult<LogFormatSetting> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(LogFormatSetting::Inferred),
        "json" => Ok(LogFormatSetting::Json),
        "pretty" => Ok(LogFormatSetting::Pretty),
        _ => Err(ConfigError::InvalidField {
            field,
            value: raw.to_string(),
            reason: "expected json or pretty",
        }),
    }
}

pub(crate) fn parse_timeout(field: &'static str, raw: &str) -> ConfigResult<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidField {
            field,
            value: raw.to_string(),
            reason: "expected whole seconds",
        })?;
    if !(1..=MAX_UPSTREAM_TIMEOUT_SECS).contains(&secs) {
        return Err(ConfigError::InvalidField {
            field,
            value: raw.to_string(),
            reason: "must be between 1 and 300 seconds",
        });
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_requires_http_scheme() {
        assert!(parse_base_url("X", "https://api.example.com").is_ok());
        let err = parse_base_url("X", "ftp://api.example.com");
        assert!(matches!(
            err,
            Err(ConfigError::InvalidField {
                reason: "scheme must be http or https",
                ..
            })
        ));
        assert!(parse_base_url("X", "not a url").is_err());
    }

    #[test]
    fn environment_accepts_common_spellings() {
        assert_eq!(
            parse_environment("X", "Production"),
            Ok(DeploymentEnv::Production)
        );
        assert_eq!(
            parse_environment("X", "dev"),
            Ok(DeploymentEnv::Development)
        );
        assert!(parse_environment("X", "mars").is_err());
    }

    #[test]
    fn timeout_is_bounded() {
        assert_eq!(parse_timeout("X", "5"), Ok(Duration::from_secs(5)));
        assert!(parse_timeout("X", "0").is_err());
        assert!(parse_timeout("X", "301").is_err());
        assert!(parse_timeout("X", "soon").is_err());
    }

    #[test]
    fn log_format_blank_means_inferred() {
        assert_eq!(parse_log_format("X", " "), Ok(LogFormatSetting::Inferred));
        assert_eq!(parse_log_format("X", "JSON"), Ok(LogFormatSetting::Json));
        assert!(parse_log_format("X", "xml").is_err());
    }
}
