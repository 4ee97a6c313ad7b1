//! RFC and Internet-Draft citation linking.
//!
//! Turns citations in backend-supplied prose into links to the document
//! host's HTML rendering, targeting the cited section's anchor when one is
//! given. Recognized forms include:
//!
//! - `RFC 5322`
//! - `(RFC 7489)`
//! - `RFC9116 section 2.1.2.`
//! - `RFC 7489, § A.1`
//! - `draft-ietf-dmarc-base-11 § 4.2`
//! - `draft-kucherawy-dkim-crypto-02 section A.1`
//!
//! The input is escaped exactly once, before matching, so no markup from the
//! input survives into the output. The visible text of every generated link
//! is the original matched substring, byte-for-byte; only the URL and anchor
//! are normalized. Linking is a pure synchronous function with no I/O and no
//! shared state, safe to call from any number of request handlers at once.

mod anchor;
mod matcher;

pub use anchor::anchor_fragment;
pub use matcher::{citations, Citation, DocumentRef};

use regex::Captures;
use std::fmt;

/// A string whose only markup is the anchor tags generated by this module.
///
/// Downstream template rendering must inject it without re-escaping;
/// templates apply the `|safe` marker after the `rfc_links` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which HTML rendering of IETF documents to link to. The two hosts use the
/// same `section-`/`appendix-` anchor convention but different base URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HostStyle {
    /// `https://datatracker.ietf.org/doc/html/rfc<N>`
    #[default]
    Datatracker,
    /// `https://www.rfc-editor.org/rfc/rfc<N>.html`. The RFC Editor does not
    /// host Internet-Drafts, so draft links keep the datatracker base.
    RfcEditor,
}

/// A citation resolved to its target URL parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    base: String,
    fragment: Option<String>,
}

impl ResolvedLink {
    /// The full link target, `base` plus `#fragment` when a section was cited.
    pub fn href(&self) -> String {
        match &self.fragment {
            Some(fragment) => format!("{}#{fragment}", self.base),
            None => self.base.clone(),
        }
    }
}

/// Rewrites citations in untrusted text into document links.
#[derive(Debug, Clone, Copy, Default)]
pub struct CitationLinker {
    style: HostStyle,
}

impl CitationLinker {
    pub fn new(style: HostStyle) -> Self {
        CitationLinker { style }
    }

    /// Escapes `text` and replaces every citation with an anchor tag. Text
    /// without citations comes back escaped but otherwise unchanged.
    pub fn render(&self, text: &str) -> SafeHtml {
        let escaped = escape_html(text);
        let linked = matcher::CITATION.replace_all(&escaped, |caps: &Captures| {
            let citation = Citation::from_captures(caps);
            // Always present in the pattern; empty at end of input.
            let terminator = caps.name("term").unwrap().as_str();
            format!(
                r#"<a href="{}">{}</a>{terminator}"#,
                self.resolve(&citation).href(),
                citation.matched_span,
            )
        });
        SafeHtml(linked.into_owned())
    }

    /// Maps a citation to its link target. Every citation resolves; a
    /// citation with no section resolves to the document root.
    pub fn resolve(&self, citation: &Citation<'_>) -> ResolvedLink {
        let base = match (citation.doc, self.style) {
            (DocumentRef::Rfc(num), HostStyle::Datatracker) => {
                format!("https://datatracker.ietf.org/doc/html/rfc{num}")
            }
            (DocumentRef::Rfc(num), HostStyle::RfcEditor) => {
                format!("https://www.rfc-editor.org/rfc/rfc{num}.html")
            }
            (DocumentRef::Draft(slug), _) => {
                format!(
                    "https://datatracker.ietf.org/doc/html/{}",
                    slug.to_lowercase()
                )
            }
        };
        ResolvedLink {
            base,
            fragment: citation.raw_section.map(anchor_fragment),
        }
    }
}

/// Links citations using the default datatracker host style.
pub fn link_citations(text: &str) -> SafeHtml {
    CitationLinker::default().render(text)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
