use std::path::PathBuf;

use cisl_loader::source::DEFAULT_DATA_PATH;

/// Invalid configuration value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Site server configuration loaded from environment variables.
///
/// All fields have defaults suitable for serving `./public` locally.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Static site directory (default: `public`).
    pub site_root: PathBuf,
    /// Data directory relative to the site root or base URL (default: `data`).
    pub data_path: String,
    /// When set, data is fetched over HTTP from this origin instead of
    /// being read from `site_root`.
    pub data_base_url: Option<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Timeout for one data fetch over HTTP in seconds (default: `10`).
    pub fetch_timeout_secs: u64,
}

impl SiteConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `3000`    |
    /// | `SITE_ROOT`            | `public`  |
    /// | `DATA_PATH`            | `data`    |
    /// | `DATA_BASE_URL`        | unset     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `FETCH_TIMEOUT_SECS`   | `10`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.into());

        let data_base_url = lookup("DATA_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: parse("PORT", var("PORT", "3000"), "u16")?,
            site_root: PathBuf::from(var("SITE_ROOT", "public")),
            data_path: var("DATA_PATH", DEFAULT_DATA_PATH),
            data_base_url,
            request_timeout_secs: parse(
                "REQUEST_TIMEOUT_SECS",
                var("REQUEST_TIMEOUT_SECS", "30"),
                "u64",
            )?,
            fetch_timeout_secs: parse(
                "FETCH_TIMEOUT_SECS",
                var("FETCH_TIMEOUT_SECS", "10"),
                "u64",
            )?,
        })
    }
}

fn parse<T: std::str::FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
