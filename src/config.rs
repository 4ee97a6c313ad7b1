use crate::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

pub type Shared = Arc<Config>;

/// The environment variables that must be set before startup.
pub const REQUIRED_VARS: [&str; 5] = [
    "SITE_TITLE",
    "SITE_AUTHOR",
    "SITE_AUTHOR_URL",
    "BACKEND_URL",
    "BACKEND_API_KEY",
];

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process-wide configuration, constructed once at startup from the
/// environment and shared by reference with every request handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub site_title: String,
    pub site_author: String,
    pub site_author_url: String,
    /// Base URL of the posture backend API, without a trailing slash.
    pub backend_url: String,
    pub backend_api_key: String,
    /// When set, the backend is asked to also probe SMTP TLS support.
    pub check_smtp_tls: bool,
    pub bind_addr: SocketAddr,
    /// Applied to both inbound request handling and backend calls.
    pub request_timeout: Duration,
}

impl Config {
    /// Build a `Config` from the process environment, or return an Error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEnvVars`] naming every unset required
    /// variable, [`Error::InvalidBindAddr`] or [`Error::InvalidTimeout`] when
    /// an optional variable is set to an unparseable value.
    pub fn try_from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a `Config` from an arbitrary variable lookup. [`try_from_env`]
    /// passes `std::env::var`; tests pass a map so they never touch the
    /// process-global environment.
    ///
    /// [`try_from_env`]: Config::try_from_env
    ///
    /// # Errors
    ///
    /// See [`Config::try_from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |var: &str| match lookup(var) {
            Some(value) => value,
            None => {
                missing.push(var.to_string());
                String::new()
            }
        };

        let site_title = required("SITE_TITLE");
        let site_author = required("SITE_AUTHOR");
        let site_author_url = required("SITE_AUTHOR_URL");
        let backend_url = required("BACKEND_URL");
        let backend_api_key = required("BACKEND_API_KEY");
        if !missing.is_empty() {
            return Err(Error::MissingEnvVars(missing));
        }

        let check_smtp_tls = lookup("CHECK_SMTP_TLS").map_or(false, |v| !v.is_empty());

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| Error::InvalidBindAddr(raw))?,
            None => SocketAddr::from(([127, 0, 0, 1], 8080)),
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                Duration::from_secs(raw.parse().map_err(|_| Error::InvalidTimeout(raw))?)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Config {
            site_title,
            site_author,
            site_author_url,
            backend_url: backend_url.trim_end_matches('/').to_string(),
            backend_api_key,
            check_smtp_tls,
            bind_addr,
            request_timeout,
        })
    }
}
