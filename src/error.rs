//! Error types.

/// Error enumerates the possible mailposture error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned at startup when one or more of the required environment
    /// variables ([`Config`][crate::config::Config] lists them) are unset.
    /// All missing names are reported together.
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),

    /// Returned at startup when `BIND_ADDR` is set but can't be parsed as a
    /// socket address.
    #[error("BIND_ADDR (\"{0}\") is not a valid socket address")]
    InvalidBindAddr(String),

    /// Returned at startup when `REQUEST_TIMEOUT_SECS` is set but can't be
    /// parsed as a whole number of seconds.
    #[error("REQUEST_TIMEOUT_SECS (\"{0}\") is not a whole number of seconds")]
    InvalidTimeout(String),

    /// Returned when a request to the posture backend fails, times out, or
    /// comes back with a non-success status.
    #[error("backend request failed")]
    Backend(#[from] reqwest::Error),

    /// Returned when rendering an HTML page template fails.
    #[error("template rendering failed")]
    Template(#[from] askama::Error),
}
