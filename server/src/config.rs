//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid STOREFRONT_API_URL '{0}' (expected an http:// or https:// URL)")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl ApiTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream REST backend that `/api/*` is forwarded to, without a trailing slash.
    pub api_base_url: String,
    pub timeouts: ApiTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STOREFRONT_API_URL`: default `http://127.0.0.1:8080`
    /// - `STOREFRONT_API_TIMEOUT_SECS`: default 15
    /// - `STOREFRONT_API_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error when `PORT` is not a valid port number or when
    /// `STOREFRONT_API_URL` is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let api_base_url = parse_base_url(lookup("STOREFRONT_API_URL").as_deref())?;
        let timeouts = ApiTimeouts {
            request_secs: parse_u64_or(lookup("STOREFRONT_API_TIMEOUT_SECS").as_deref(), DEFAULT_API_TIMEOUT_SECS),
            connect_secs: parse_u64_or(
                lookup("STOREFRONT_API_CONNECT_TIMEOUT_SECS").as_deref(),
                DEFAULT_API_CONNECT_TIMEOUT_SECS,
            ),
        };

        Ok(Self { port, api_base_url, timeouts })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    let scheme_ok = value.starts_with("http://") || value.starts_with("https://");
    let trimmed = value.trim_end_matches('/');
    let has_host = trimmed.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
    if !scheme_ok || !has_host {
        return Err(ConfigError::InvalidApiUrl(value.to_owned()));
    }
    Ok(trimmed.to_owned())
}

// Unparseable or zero values fall back to the default.
fn parse_u64_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
