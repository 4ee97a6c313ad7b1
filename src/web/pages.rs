use crate::backend::{CheckOutcome, DomainReport};
use crate::config::Config;
use askama::Template;

/// Landing page with the lookup form.
#[derive(Template)]
#[template(path = "index.html")]
pub(super) struct HomePage {
    site_title: String,
    site_author: String,
    site_author_url: String,
}

impl HomePage {
    pub fn new(config: &Config) -> Self {
        HomePage {
            site_title: config.site_title.clone(),
            site_author: config.site_author.clone(),
            site_author_url: config.site_author_url.clone(),
        }
    }
}

/// One labeled check in display order.
pub(super) struct ReportSection {
    pub name: &'static str,
    pub check: CheckOutcome,
}

/// The posture report page for a domain that exists.
#[derive(Template)]
#[template(path = "domain.html")]
pub(super) struct DomainPage {
    site_title: String,
    site_author: String,
    site_author_url: String,
    domain: String,
    sections: Vec<ReportSection>,
    elapsed_time: String,
}

impl DomainPage {
    pub fn new(config: &Config, domain: &str, report: &DomainReport, elapsed_secs: f64) -> Self {
        DomainPage {
            site_title: config.site_title.clone(),
            site_author: config.site_author.clone(),
            site_author_url: config.site_author_url.clone(),
            domain: domain.to_string(),
            sections: report
                .sections()
                .into_iter()
                .map(|(name, check)| ReportSection {
                    name,
                    check: check.clone(),
                })
                .collect(),
            elapsed_time: format!("{elapsed_secs:.3}"),
        }
    }
}

/// Rendered with HTTP 404 when the SOA lookup says the domain is absent.
#[derive(Template)]
#[template(path = "domain_not_found.html")]
pub(super) struct DomainNotFoundPage {
    site_title: String,
    site_author: String,
    site_author_url: String,
    domain: String,
    elapsed_time: String,
}

impl DomainNotFoundPage {
    pub fn new(config: &Config, domain: &str, elapsed_secs: f64) -> Self {
        DomainNotFoundPage {
            site_title: config.site_title.clone(),
            site_author: config.site_author.clone(),
            site_author_url: config.site_author_url.clone(),
            domain: domain.to_string(),
            elapsed_time: format!("{elapsed_secs:.3}"),
        }
    }
}

mod filters {
    /// Template filter wiring backend prose through the citation linker.
    /// Output is pre-escaped, so templates pair it with `|safe`.
    pub fn rfc_links(text: &str) -> ::askama::Result<String> {
        Ok(crate::citations::link_citations(text).into_string())
    }
}
