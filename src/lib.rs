//! Web front end for a mail security posture checker.
//!
//! Serves an HTML report of a domain's email posture (SOA, SPF, DMARC,
//! MTA-STS, BIMI, optionally SMTP TLS) fetched from a backend API. Prose in
//! the report is run through the [citation linker][citations] so RFC and
//! Internet-Draft references become links to the cited document and section.

#![warn(clippy::pedantic)]

pub mod backend;
pub mod citations;
pub mod config;
pub mod domain;
pub mod error;
pub mod web;

#[allow(clippy::module_name_repetitions)]
pub use citations::{link_citations, CitationLinker, HostStyle, SafeHtml};
pub use config::{Config, Shared};
pub use error::Error;
