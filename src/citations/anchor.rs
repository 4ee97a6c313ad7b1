use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMERIC_SECTION: Regex = Regex::new(r"\A\d+(?:\.\d+)*\z").unwrap();
    static ref APPENDIX_SECTION: Regex =
        Regex::new(r"\A([A-Za-z])(?:\.(\d+(?:\.\d+)*))?\z").unwrap();
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref TRAILING_PUNCT: Regex = Regex::new(r"[).,;: ]+\z").unwrap();
}

/// Maps a raw section string to the fragment identifier used by the document
/// host's HTML rendering:
///
/// - `4.1.2` -> `section-4.1.2`
/// - `A`     -> `appendix-a`
/// - `A.1.2` -> `appendix-a-1-2`
/// - anything else -> `section-<slug>`
///
/// Total over any input. Section text that is entirely punctuation slugs to
/// the degenerate fragment `section-`.
pub fn anchor_fragment(raw_section: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw_section.trim(), " ");
    let section = TRAILING_PUNCT.replace(&collapsed, "");

    if NUMERIC_SECTION.is_match(&section) {
        return format!("section-{section}");
    }

    if let Some(caps) = APPENDIX_SECTION.captures(&section) {
        let head = caps[1].to_ascii_lowercase();
        return match caps.get(2) {
            Some(tail) => format!("appendix-{head}-{}", tail.as_str().replace('.', "-")),
            None => format!("appendix-{head}"),
        };
    }

    let slug = NON_ALPHANUMERIC.replace_all(&section, "-");
    let slug = slug.trim_matches('-').to_lowercase();
    format!("section-{slug}")
}

#[cfg(test)]
mod tests {
    use super::anchor_fragment;

    #[test]
    fn test_numeric_sections() {
        assert_eq!(anchor_fragment("4"), "section-4");
        assert_eq!(anchor_fragment("4.1.2"), "section-4.1.2");
        assert_eq!(anchor_fragment("2.1.2."), "section-2.1.2");
    }

    #[test]
    fn test_appendix_sections() {
        assert_eq!(anchor_fragment("A"), "appendix-a");
        assert_eq!(anchor_fragment("A.1"), "appendix-a-1");
        assert_eq!(anchor_fragment("A.1.2"), "appendix-a-1-2");
        assert_eq!(anchor_fragment("b.3"), "appendix-b-3");
    }

    #[test]
    fn test_trailing_punctuation_stripped() {
        assert_eq!(anchor_fragment("A.1),"), "appendix-a-1");
        assert_eq!(anchor_fragment("  4.2 ; "), "section-4.2");
    }

    #[test]
    fn test_slug_fallback() {
        assert_eq!(anchor_fragment("3.4-3.6"), "section-3-4-3-6");
        assert_eq!(anchor_fragment("IV"), "section-iv");
        assert_eq!(anchor_fragment("Table_2"), "section-table-2");
    }

    #[test]
    fn test_degenerate_slug() {
        assert_eq!(anchor_fragment("---"), "section-");
        assert_eq!(anchor_fragment(""), "section-");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(anchor_fragment("A.1"), anchor_fragment("A.1"));
    }
}
