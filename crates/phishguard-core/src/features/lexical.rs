//! Individual lexical signals over the raw URL and its host.

use regex::Regex;
use std::sync::LazyLock;

/// URLs longer than this many characters are "long".
pub(crate) const LONG_URL_CHARS: usize = 75;

/// URLs shorter than this many characters are "short".
pub(crate) const SHORT_URL_CHARS: usize = 15;

/// Dotted quad anchored at the start of the host only; anything may follow.
static DOTTED_QUAD_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+").unwrap());

pub(crate) fn starts_with_dotted_quad(host: &str) -> bool {
    DOTTED_QUAD_PREFIX_RE.is_match(host)
}

pub(crate) fn is_long(url: &str) -> bool {
    url.chars().count() > LONG_URL_CHARS
}

pub(crate) fn is_short(url: &str) -> bool {
    url.chars().count() < SHORT_URL_CHARS
}

/// Dots in the host minus one; `-1` for a host without dots.
pub(crate) fn subdomain_count(host: &str) -> i64 {
    host.matches('.').count() as i64 - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_quad_prefix() {
        assert!(starts_with_dotted_quad("10.0.0.1"));
        assert!(starts_with_dotted_quad("10.0.0.1:8080"));
        assert!(starts_with_dotted_quad("1.2.3.4.evil.com"));
        assert!(starts_with_dotted_quad("999.999.999.999"));
        assert!(!starts_with_dotted_quad("user@10.0.0.1"));
        assert!(!starts_with_dotted_quad("10.0.0"));
        assert!(!starts_with_dotted_quad("example.com"));
        assert!(!starts_with_dotted_quad(""));
    }

    #[test]
    fn subdomains_unclamped() {
        assert_eq!(subdomain_count(""), -1);
        assert_eq!(subdomain_count("localhost"), -1);
        assert_eq!(subdomain_count("example.com"), 0);
        assert_eq!(subdomain_count("a.b.example.com"), 2);
    }

    #[test]
    fn thresholds() {
        assert!(!is_long(&"x".repeat(LONG_URL_CHARS)));
        assert!(is_long(&"x".repeat(LONG_URL_CHARS + 1)));
        assert!(!is_short(&"x".repeat(SHORT_URL_CHARS)));
        assert!(is_short(&"x".repeat(SHORT_URL_CHARS - 1)));
        assert!(is_short(""));
    }
}
