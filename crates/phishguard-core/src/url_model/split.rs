//! Lenient RFC 3986-style splitting: `scheme ":" "//" authority path ";" params "?" query "#" fragment`.

use std::net::Ipv6Addr;

use unicode_normalization::UnicodeNormalization;

use super::ParsedUrl;

/// Schemes whose last path segment may carry `;params`.
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Reasons a URL cannot be split into components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("unbalanced brackets in authority {authority:?}")]
    UnbalancedBrackets { authority: String },
    #[error("invalid bracketed host {host:?}")]
    InvalidBracketedHost { host: String },
    #[error("authority {authority:?} contains characters that normalize to URL separators")]
    NormalizedSeparator { authority: String },
}

/// Splits `url` into raw components.
///
/// Leading control characters and spaces are ignored and TAB/CR/LF are dropped
/// before splitting. Splitting fails on a malformed bracketed (IPv6) authority,
/// or on a non-ASCII authority whose NFKC form smuggles in a separator.
pub fn split_url(url: &str) -> Result<ParsedUrl, SplitError> {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let mut rest = cleaned.as_str();

    let mut scheme = String::new();
    if let Some((candidate, after)) = rest.split_once(':') {
        if is_scheme(candidate) {
            scheme = candidate.to_ascii_lowercase();
            rest = after;
        }
    }

    let mut host = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        host = &after[..end];
        rest = &after[end..];
        check_brackets(host)?;
        check_normalized(host)?;
    }

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (mut path, query) = rest.split_once('?').unwrap_or((rest, ""));

    let mut params = "";
    if USES_PARAMS.contains(&scheme.as_str()) {
        (path, params) = split_params(path);
    }

    Ok(ParsedUrl {
        scheme,
        host: host.to_string(),
        path: path.to_string(),
        params: params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    })
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn check_brackets(authority: &str) -> Result<(), SplitError> {
    let open = authority.contains('[');
    let close = authority.contains(']');
    if open != close {
        return Err(SplitError::UnbalancedBrackets {
            authority: authority.to_string(),
        });
    }
    if !open {
        return Ok(());
    }

    let bracketed = authority
        .split_once('[')
        .map(|(_, tail)| tail.split_once(']').map_or(tail, |(inner, _)| inner))
        .unwrap_or_default();
    if is_bracketed_host(bracketed) {
        Ok(())
    } else {
        Err(SplitError::InvalidBracketedHost {
            host: bracketed.to_string(),
        })
    }
}

/// Rejects authorities like `a／b.com` whose NFKC form contains one of
/// `/?#@:` that the raw text does not.
fn check_normalized(authority: &str) -> Result<(), SplitError> {
    if authority.is_ascii() {
        return Ok(());
    }
    let stripped: String = authority
        .chars()
        .filter(|c| !matches!(c, '@' | ':' | '#' | '?'))
        .collect();
    let normalized: String = stripped.nfkc().collect();
    if normalized == stripped {
        return Ok(());
    }
    if normalized.contains(['/', '?', '#', '@', ':']) {
        return Err(SplitError::NormalizedSeparator {
            authority: authority.to_string(),
        });
    }
    Ok(())
}

/// IPv6 literal (optionally with a `%zone`) or an IPvFuture literal `vHEX.rest`.
fn is_bracketed_host(host: &str) -> bool {
    if let Some(future) = host.strip_prefix('v') {
        return match future.split_once('.') {
            Some((version, tail)) => {
                !version.is_empty()
                    && version.chars().all(|c| c.is_ascii_hexdigit())
                    && !tail.is_empty()
            }
            None => false,
        };
    }
    let address = host.split_once('%').map_or(host, |(addr, _zone)| addr);
    address.parse::<Ipv6Addr>().is_ok()
}

/// Splits `;params` off the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    let search_from = path.rfind('/').unwrap_or(0);
    match path[search_from..].find(';') {
        Some(offset) => {
            let i = search_from + offset;
            (&path[..i], &path[i + 1..])
        }
        None => (path, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        let p = split_url("HTTP://host.example:80/p/a;type=x?k=v#top").unwrap();
        assert_eq!(p.scheme, "http");
        assert_eq!(p.host, "host.example:80");
        assert_eq!(p.path, "/p/a");
        assert_eq!(p.params, "type=x");
        assert_eq!(p.query, "k=v");
        assert_eq!(p.fragment, "top");
    }

    #[test]
    fn no_scheme_means_no_authority() {
        let p = split_url("example.com/login").unwrap();
        assert_eq!(p.scheme, "");
        assert_eq!(p.host, "");
        assert_eq!(p.path, "example.com/login");
    }

    #[test]
    fn protocol_relative_authority() {
        let p = split_url("//cdn.example.com/x").unwrap();
        assert_eq!(p.scheme, "");
        assert_eq!(p.host, "cdn.example.com");
        assert_eq!(p.path, "/x");
    }

    #[test]
    fn invalid_scheme_chars_are_path() {
        let p = split_url("1http://a/b").unwrap();
        assert_eq!(p.scheme, "");
        assert_eq!(p.host, "");
        assert_eq!(p.path, "1http://a/b");
    }

    #[test]
    fn empty_authority_keeps_double_slash_path() {
        let p = split_url("http:////evil.example/").unwrap();
        assert_eq!(p.host, "");
        assert_eq!(p.path, "//evil.example/");
    }

    #[test]
    fn strips_leading_controls_and_embedded_newlines() {
        let p = split_url("  \thttps://ex\nample.com/a").unwrap();
        assert_eq!(p.scheme, "https");
        assert_eq!(p.host, "example.com");
        assert_eq!(p.path, "/a");
    }

    #[test]
    fn params_only_for_param_schemes() {
        let p = split_url("mailto:user;x@example.com").unwrap();
        assert_eq!(p.scheme, "mailto");
        assert_eq!(p.path, "user;x@example.com");
        assert_eq!(p.params, "");
    }

    #[test]
    fn params_taken_after_last_slash() {
        let p = split_url("http://h/a;b/c;d").unwrap();
        assert_eq!(p.path, "/a;b/c");
        assert_eq!(p.params, "d");
    }

    #[test]
    fn ipv6_authority() {
        let p = split_url("http://[2001:db8::1]:8080/").unwrap();
        assert_eq!(p.host, "[2001:db8::1]:8080");
        assert!(split_url("http://[fe80::1%25eth0]/").is_ok());
        assert!(split_url("http://[v1.fe]/").is_ok());
    }

    #[test]
    fn malformed_brackets_fail() {
        assert!(matches!(
            split_url("http://[::1/"),
            Err(SplitError::UnbalancedBrackets { .. })
        ));
        assert!(matches!(
            split_url("http://a]b/"),
            Err(SplitError::UnbalancedBrackets { .. })
        ));
        assert!(matches!(
            split_url("http://[not-an-ip]/"),
            Err(SplitError::InvalidBracketedHost { .. })
        ));
        assert!(matches!(
            split_url("http://[1.2.3.4]/"),
            Err(SplitError::InvalidBracketedHost { .. })
        ));
    }

    #[test]
    fn fullwidth_separator_in_authority_fails() {
        assert!(matches!(
            split_url("http://a\u{ff0f}b.com/"),
            Err(SplitError::NormalizedSeparator { .. })
        ));
        assert!(matches!(
            split_url("https://user\u{ff20}evil.example/"),
            Err(SplitError::NormalizedSeparator { .. })
        ));
    }

    #[test]
    fn non_ascii_authority_without_separators_splits() {
        let p = split_url("http://b\u{fc}cher.example/x").unwrap();
        assert_eq!(p.host, "b\u{fc}cher.example");

        // Full-width letters normalize, but not to a separator.
        let p = split_url("http://\u{ff45}xample.com/").unwrap();
        assert_eq!(p.host, "\u{ff45}xample.com");
    }
}
