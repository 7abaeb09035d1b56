//! Tag extraction from decoded EXIF/IPTC field values.
//!
//! Metadata fields follow the free-text convention
//! `"A. N. Other <https://another.com/home/>"` — display text with an optional
//! angle-bracket-delimited URL. Absence of a match is signaled by `None` (or
//! the whole trimmed text for [`non_url_text`]), never an error.

use regex::Regex;
use std::sync::LazyLock;

static BRACKETED_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(https?://[^>]+)>").expect("bracketed URL regex should compile")
});

static CC_LICENSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(https?://creativecommons\.org/licenses/[^>]+)>")
        .expect("CC license regex should compile")
});

static CC_PUBLIC_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(https?://creativecommons\.org/publicdomain/[^>]+)>")
        .expect("CC public domain regex should compile")
});

/// Extract the first angle-bracketed URL from a field value.
///
/// Returns the URL with the brackets stripped and whitespace trimmed, or
/// `None` if no `<http(s)://…>` span is present. An unterminated `<` never
/// matches.
pub fn url(text: &str) -> Option<String> {
    BRACKETED_URL
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Extract the non-URL text from a field value.
///
/// Every `<http(s)://…>` span is removed and the remainder trimmed. A value
/// without any URL span comes back whole, trimmed.
pub fn non_url_text(text: &str) -> String {
    BRACKETED_URL.replace_all(text, "").trim().to_string()
}

/// Extract a Creative Commons license candidate from a Copyright field.
///
/// Tries, in order: a bracketed URL under `creativecommons.org/licenses/`,
/// then one under `creativecommons.org/publicdomain/`. The two path prefixes
/// are distinct and non-overlapping, so at most one can match per bracketed
/// slot; the license pass runs first.
pub fn license_candidate(copyright: &str) -> Option<String> {
    CC_LICENSE
        .captures(copyright)
        .or_else(|| CC_PUBLIC_DOMAIN.captures(copyright))
        .map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── url ───────────────────────────────────────────────────────────

    #[test]
    fn url_extracts_bracketed_span() {
        assert_eq!(
            url("A. N. Other <https://another.com/home/>"),
            Some("https://another.com/home/".to_string())
        );
        assert_eq!(
            url("<http://example.com/a>"),
            Some("http://example.com/a".to_string())
        );
    }

    #[test]
    fn url_none_without_bracketed_span() {
        assert_eq!(url("A. N. Other"), None);
        assert_eq!(url(""), None);
        // Bare URL without brackets does not count
        assert_eq!(url("see https://another.com/home/"), None);
    }

    #[test]
    fn url_first_of_several_wins() {
        assert_eq!(
            url("<https://first.example/> and <https://second.example/>"),
            Some("https://first.example/".to_string())
        );
    }

    #[test]
    fn url_unterminated_bracket_never_matches() {
        assert_eq!(url("A. N. Other <https://another.com/home/"), None);
    }

    #[test]
    fn url_requires_http_scheme() {
        assert_eq!(url("<ftp://another.com/home/>"), None);
    }

    // ── non_url_text ──────────────────────────────────────────────────

    #[test]
    fn non_url_text_strips_url_span() {
        assert_eq!(
            non_url_text("A. N. Other <https://another.com/home/>"),
            "A. N. Other"
        );
    }

    #[test]
    fn non_url_text_without_span_is_trimmed_input() {
        assert_eq!(non_url_text("  A. N. Other  "), "A. N. Other");
        assert_eq!(non_url_text(""), "");
    }

    #[test]
    fn non_url_text_strips_every_span() {
        assert_eq!(
            non_url_text("a <https://x.example/> b <http://y.example/> c"),
            "a  b  c"
        );
    }

    // ── license_candidate ─────────────────────────────────────────────

    #[test]
    fn license_candidate_finds_license_url() {
        assert_eq!(
            license_candidate(
                "CC BY-SA <https://creativecommons.org/licenses/by-sa/4.0/>"
            ),
            Some("https://creativecommons.org/licenses/by-sa/4.0/".to_string())
        );
    }

    #[test]
    fn license_candidate_finds_public_domain_url() {
        assert_eq!(
            license_candidate("<https://creativecommons.org/publicdomain/zero/1.0/>"),
            Some("https://creativecommons.org/publicdomain/zero/1.0/".to_string())
        );
    }

    #[test]
    fn license_candidate_ignores_other_hosts() {
        assert_eq!(license_candidate("<https://example.com/licenses/by/4.0/>"), None);
        assert_eq!(license_candidate("all rights reserved"), None);
    }

    #[test]
    fn license_candidate_prefers_license_over_dedication() {
        // Both present in one string: the licenses pass runs first even when
        // the public-domain URL appears earlier in the text.
        let s = "<https://creativecommons.org/publicdomain/zero/1.0/> \
                 <https://creativecommons.org/licenses/by/4.0/>";
        assert_eq!(
            license_candidate(s),
            Some("https://creativecommons.org/licenses/by/4.0/".to_string())
        );
    }
}
