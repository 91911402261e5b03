//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "target/site";
pub const DEFAULT_STAGING_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_STAGING_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream staging API base URL without a trailing slash. `None`
    /// disables the proxy.
    pub staging_api_url: Option<String>,
    pub site_root: PathBuf,
    pub staging_timeout_secs: u64,
    pub staging_connect_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STAGING_API_URL`: `http(s)://` base of the staging API; unset or
    ///   blank disables the proxy
    /// - `SITE_ROOT`: directory holding `pkg/`, default `target/site`
    /// - `STAGING_TIMEOUT_SECS`: default 120
    /// - `STAGING_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let staging_api_url = parse_base_url(lookup("STAGING_API_URL"))?;
        let site_root = lookup("SITE_ROOT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT), PathBuf::from);
        let staging_timeout_secs = parse_number(&lookup, "STAGING_TIMEOUT_SECS", DEFAULT_STAGING_TIMEOUT_SECS)?;
        let staging_connect_timeout_secs =
            parse_number(&lookup, "STAGING_CONNECT_TIMEOUT_SECS", DEFAULT_STAGING_CONNECT_TIMEOUT_SECS)?;

        Ok(Self { port, staging_api_url, site_root, staging_timeout_secs, staging_connect_timeout_secs })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            staging_api_url: None,
            site_root: PathBuf::from(DEFAULT_SITE_ROOT),
            staging_timeout_secs: DEFAULT_STAGING_TIMEOUT_SECS,
            staging_connect_timeout_secs: DEFAULT_STAGING_CONNECT_TIMEOUT_SECS,
        }
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw, reason: "expected a non-negative integer" }),
        _ => Ok(default),
    }
}

fn parse_base_url(raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid { var: "STAGING_API_URL", value: raw, reason: "expected an http(s) URL" });
    }
    Ok(Some(trimmed.to_owned()))
}
