//! HTML front end.
//!
//! # Endpoints
//!
//! ## `/healthcheck` (GET)
//!
//!   Returns HTTP 200 (OK) and the JSON body `{"ok":"healthy"}` when the
//!   service is operational.
//!
//! ## `/` (GET)
//!
//!   Renders the landing page with the domain lookup form.
//!
//! ## `/` (POST)
//!
//!   Expects a form body with a `domain` field. The submitted value is
//!   [normalized][crate::domain::normalize_domain] and the client is
//!   redirected to `/domain/<domain>`.
//!
//! ## `/domain/:domain` (GET)
//!
//!   Normalizes the domain, fetches its posture report from the
//!   [backend][crate::backend], and renders the report page. When the
//!   backend's SOA lookup says the domain does not exist, a dedicated page
//!   is rendered with HTTP 404 (Not Found). Prose fields of the report are
//!   passed through the citation linker so RFC and draft references become
//!   links.

mod page_error;
mod pages;
mod routes;
pub mod server;

pub use server::new;
