use crate::backend::{DomainReport, PostureBackend};
use crate::config::Shared;
use crate::error::Error;

/// HTTP client for the posture backend API.
///
/// Reports come from `GET <backend_url>/domain/<domain>`, authenticated with
/// the configured API key as a query parameter.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: Shared,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Build a client honoring the configured request timeout, or return an
    /// Error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`] if the underlying HTTP client can't be
    /// constructed.
    pub fn new(config: Shared) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(HttpBackend { config, client })
    }
}

#[async_trait::async_trait]
impl PostureBackend for HttpBackend {
    async fn domain_report(&self, domain: &str) -> Result<DomainReport, Error> {
        let url = format!("{}/domain/{domain}", self.config.backend_url);
        let mut query: Vec<(&str, &str)> = vec![("api_key", &self.config.backend_api_key)];
        if self.config.check_smtp_tls {
            query.push(("check_smtp_tls", "true"));
        }

        tracing::debug!("querying backend for \"{domain}\"");
        let report = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(report)
    }
}
