//! Domain name normalization for user-supplied lookups.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // ZWSP, ZWNJ, ZWJ, and the BOM/zero-width no-break space.
    static ref ZERO_WIDTH: Regex = Regex::new("[\u{200B}-\u{200D}\u{FEFF}]").unwrap();
}

/// Normalizes a domain or subdomain: Unicode NFC form, zero-width characters
/// removed, then lowercased. Domains are case-insensitive, and zero-width
/// characters routinely sneak in when a name is pasted from rich text.
pub fn normalize_domain(domain: &str) -> String {
    let composed: String = domain.nfc().collect();
    ZERO_WIDTH.replace_all(&composed, "").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_domain;

    #[test]
    fn test_plain_domain_unchanged() {
        assert_eq!(normalize_domain("example.com"), "example.com");
    }

    #[test]
    fn test_lowercased() {
        assert_eq!(normalize_domain("Mail.Example.COM"), "mail.example.com");
    }

    #[test]
    fn test_zero_width_characters_removed() {
        assert_eq!(normalize_domain("exam\u{200B}ple.com"), "example.com");
        assert_eq!(normalize_domain("\u{FEFF}example.com"), "example.com");
        assert_eq!(normalize_domain("ex\u{200D}am\u{200C}ple.com"), "example.com");
    }

    #[test]
    fn test_nfc_composition() {
        // U+0065 U+0301 (e + combining acute) composes to U+00E9.
        assert_eq!(normalize_domain("caf\u{0065}\u{0301}.example"), "caf\u{00E9}.example");
    }
}
