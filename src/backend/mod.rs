//! Posture backend access.
//!
//! The front end renders whatever the backend API reports about a domain's
//! email security posture (SOA, SPF, DMARC, MTA-STS, BIMI, and optionally
//! SMTP TLS). Report retrieval sits behind the [`PostureBackend`] trait so
//! handlers and tests don't care whether a report came over HTTP.

mod http;
mod model;

use crate::error::Error;
use std::sync::Arc;

#[allow(clippy::module_name_repetitions)]
pub use http::HttpBackend;
pub use model::{CheckOutcome, DomainReport};

/// `DynBackend` is a type alias for a [`PostureBackend`] shared across
/// request handlers through an [`Arc`].
#[allow(clippy::module_name_repetitions)]
pub type DynBackend = Arc<dyn PostureBackend + Send + Sync>;

/// An async trait describing retrieval of a domain's posture report.
#[async_trait::async_trait]
pub trait PostureBackend {
    /// Fetch the posture report for the given (already normalized) domain.
    async fn domain_report(&self, domain: &str) -> Result<DomainReport, Error>;
}
