//! URL modeling for lexical analysis.
//!
//! Splits a raw URL string into its components without normalizing any of
//! them: the host keeps its case, userinfo and port; the path keeps empty
//! segments and percent escapes. Lexical features are computed on exactly the
//! text the user typed.

mod split;

pub use split::{split_url, SplitError};

/// Components of a URL as written.
///
/// `host` is the whole authority (`user@host:port`), not just the hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl ParsedUrl {
    /// Splits `url`, falling back to all-empty components when it cannot be split.
    ///
    /// Never fails; a malformed URL simply yields empty strings so that
    /// extraction can still proceed.
    pub fn parse_lenient(url: &str) -> Self {
        match split_url(url) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(error = %err, "url split failed, using empty components");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parse_keeps_raw_components() {
        let p = ParsedUrl::parse_lenient("https://User@Sub.Example.com:8443/a//b?q=1#frag");
        assert_eq!(p.scheme, "https");
        assert_eq!(p.host, "User@Sub.Example.com:8443");
        assert_eq!(p.path, "/a//b");
        assert_eq!(p.query, "q=1");
        assert_eq!(p.fragment, "frag");
    }

    #[test]
    fn lenient_parse_failure_yields_empty_components() {
        let p = ParsedUrl::parse_lenient("http://[::1/path");
        assert_eq!(p, ParsedUrl::default());
    }

    #[test]
    fn lenient_parse_empty_string() {
        assert_eq!(ParsedUrl::parse_lenient(""), ParsedUrl::default());
    }
}
