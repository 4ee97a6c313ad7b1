use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Matches one RFC or Internet-Draft citation, optionally followed by a
    /// section marker (`§`, `§§`, or the word "section") and a conservative
    /// section token.
    ///
    /// A match must end at a natural boundary (whitespace, `]`, `)`, `,`,
    /// `;`, `:`, `.`, or end of input). The boundary character is consumed
    /// into the `term` group and re-emitted verbatim after the generated
    /// anchor tag, so substitution leaves surrounding prose untouched.
    pub(super) static ref CITATION: Regex = Regex::new(
        r"(?ix)
        \b
        (?:
            RFC \s* (?P<rfc>\d+)
          | (?P<draft>draft-[A-Za-z0-9][A-Za-z0-9-]*)
        )
        (?:
            \s*,?\s*
            (?: §{1,2} | section )
            \s*
            (?P<section>
                [^\s\]\),;:.]+
                (?:\.[^\s\]\),;:.]+)*
                (?:-[^\s\]\),;:.]+)*
            )
        )?
        (?P<term>[\s\]\),;:.]|$)
        ",
    )
    .unwrap();
}

/// The document a citation refers to.
///
/// RFC numbers are kept as the original digit run rather than parsed, so a
/// citation like `RFC 0042` links to `rfc0042` exactly as written. Draft
/// slugs keep their original casing here; they are lowercased only when the
/// URL is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRef<'a> {
    Rfc(&'a str),
    Draft(&'a str),
}

/// A single maximal citation match in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Citation<'a> {
    /// Which document the citation refers to.
    pub doc: DocumentRef<'a>,
    /// The section text exactly as it appeared, if a section marker was
    /// present (e.g. `4.1.2`, `A.1`).
    pub raw_section: Option<&'a str>,
    /// The exact original substring, used verbatim as the link text.
    pub matched_span: &'a str,
}

impl<'a> Citation<'a> {
    pub(super) fn from_captures(caps: &Captures<'a>) -> Self {
        // Groups 0 and "term" always participate in a CITATION match.
        let full = caps.get(0).unwrap();
        let term = caps.name("term").unwrap();

        let doc = match (caps.name("rfc"), caps.name("draft")) {
            (Some(num), _) => DocumentRef::Rfc(num.as_str()),
            (_, Some(slug)) => DocumentRef::Draft(slug.as_str()),
            // The alternation guarantees one of the two groups matched.
            _ => unreachable!(),
        };

        Citation {
            doc,
            raw_section: caps.name("section").map(|m| m.as_str()),
            matched_span: &full.as_str()[..full.len() - term.len()],
        }
    }
}

/// Returns a lazy left-to-right iterator over every non-overlapping citation
/// in `text`. Scanning resumes immediately after each consumed match.
pub fn citations(text: &str) -> impl Iterator<Item = Citation<'_>> {
    CITATION
        .captures_iter(text)
        .map(|caps| Citation::from_captures(&caps))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(text: &str) -> Citation<'_> {
        let mut found = citations(text);
        let citation = found.next().expect("expected one citation");
        assert!(found.next().is_none(), "expected exactly one citation");
        citation
    }

    #[test]
    fn test_rfc_with_space() {
        let c = only("see RFC 5322 for details");
        assert_eq!(c.doc, DocumentRef::Rfc("5322"));
        assert_eq!(c.raw_section, None);
        assert_eq!(c.matched_span, "RFC 5322");
    }

    #[test]
    fn test_rfc_without_space() {
        let c = only("RFC9116 section 2.1.2.");
        assert_eq!(c.doc, DocumentRef::Rfc("9116"));
        assert_eq!(c.raw_section, Some("2.1.2"));
        assert_eq!(c.matched_span, "RFC9116 section 2.1.2");
    }

    #[test]
    fn test_rfc_lowercase() {
        let c = only("rfc 7489,");
        assert_eq!(c.doc, DocumentRef::Rfc("7489"));
        assert_eq!(c.matched_span, "rfc 7489");
    }

    #[test]
    fn test_section_sign() {
        let c = only("RFC 7489, § A.1");
        assert_eq!(c.raw_section, Some("A.1"));
        assert_eq!(c.matched_span, "RFC 7489, § A.1");
    }

    #[test]
    fn test_doubled_section_sign() {
        let c = only("RFC 7489 §§ 3.4-3.6");
        assert_eq!(c.raw_section, Some("3.4-3.6"));
    }

    #[test]
    fn test_draft_with_version_suffix() {
        let c = only("draft-ietf-dmarc-base-11 § 4.2");
        assert_eq!(c.doc, DocumentRef::Draft("draft-ietf-dmarc-base-11"));
        assert_eq!(c.raw_section, Some("4.2"));
    }

    #[test]
    fn test_draft_without_version_suffix() {
        let c = only("draft-kucherawy-dkim-crypto is expired");
        assert_eq!(c.doc, DocumentRef::Draft("draft-kucherawy-dkim-crypto"));
        assert_eq!(c.raw_section, None);
    }

    #[test]
    fn test_draft_preserves_case_in_span() {
        let c = only("Draft-IETF-DMARC-Base-11.");
        assert_eq!(c.doc, DocumentRef::Draft("Draft-IETF-DMARC-Base-11"));
        assert_eq!(c.matched_span, "Draft-IETF-DMARC-Base-11");
    }

    #[test]
    fn test_parenthesized() {
        let c = only("(RFC 7489)");
        assert_eq!(c.doc, DocumentRef::Rfc("7489"));
        assert_eq!(c.matched_span, "RFC 7489");
    }

    #[test]
    fn test_no_match_inside_word() {
        assert_eq!(citations("XRFC 5322").count(), 0);
        assert_eq!(citations("ipdraft-foo-01").count(), 0);
    }

    #[test]
    fn test_no_match_without_boundary() {
        // "RFC 5322bis" never ends at a natural boundary, so no citation.
        assert_eq!(citations("RFC 5322bis").count(), 0);
    }

    #[test]
    fn test_marker_without_section_token() {
        // A dangling marker cannot satisfy the section group; the citation
        // still matches without a section.
        let c = only("RFC 5322, section");
        assert_eq!(c.raw_section, None);
        assert_eq!(c.matched_span, "RFC 5322");
    }

    #[test]
    fn test_multiple_matches_in_order() {
        let found: Vec<_> = citations("RFC 5321 then RFC 5322.").collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].doc, DocumentRef::Rfc("5321"));
        assert_eq!(found[1].doc, DocumentRef::Rfc("5322"));
    }

    #[test]
    fn test_leading_zeros_kept() {
        let c = only("RFC 0042 ");
        assert_eq!(c.doc, DocumentRef::Rfc("0042"));
    }
}
