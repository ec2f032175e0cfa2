//! URL shape validation.

use url::Url;

/// Checks whether `candidate` qualifies as a well-formed URL.
///
/// A candidate is valid iff it parses with a non-empty scheme and a host,
/// joined by a literal `://` separator. Leading whitespace invalidates the
/// candidate; trailing whitespace is tolerated (callers strip it before use
/// as a registry key). Parse failures return `false`, never panic.
///
/// The WHATWG parser behind [`Url::parse`] is laxer than this contract in two
/// ways, both guarded against explicitly: it strips leading whitespace before
/// parsing, and it repairs single-slash forms like `https:/host` into a valid
/// authority.
///
/// # Examples
///
/// ```
/// use shorty::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/some/path"));
/// assert!(is_valid_url("https://example.com/some/path   "));
/// assert!(!is_valid_url("   https://example.com"));
/// assert!(!is_valid_url("example.com/no/scheme"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.starts_with(char::is_whitespace) {
        return false;
    }

    let trimmed = candidate.trim_end();
    match Url::parse(trimmed) {
        // Parsing lowercases the scheme but keeps its length, so indexing
        // past it lands on the separator exactly as written in the input.
        Ok(parsed) => parsed.has_host() && trimmed[parsed.scheme().len()..].starts_with("://"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_http_url_with_port() {
        assert!(is_valid_url("http://www.cwi.nl:80/guido/Python.html"));
    }

    #[test]
    fn test_valid_https_urls() {
        assert!(is_valid_url("https://www.avalidurl.com/sovalid/sowow"));
        assert!(is_valid_url("https://avalidurl.com/sovalid/sowow"));
        assert!(is_valid_url("https://shor.ty/"));
    }

    #[test]
    fn test_trailing_whitespace_is_tolerated() {
        assert!(is_valid_url("https://shor.ty/    "));
    }

    #[test]
    fn test_leading_whitespace_is_rejected() {
        assert!(!is_valid_url("    https://shor.ty/"));
        assert!(!is_valid_url("\thttps://shor.ty/"));
    }

    #[test]
    fn test_missing_scheme_is_rejected() {
        assert!(!is_valid_url("www.hithere.com/data/without/http/in/front"));
        assert!(!is_valid_url("thisisaverylongurl.com/trustme/itisvery/verylong"));
    }

    #[test]
    fn test_non_url_strings_are_rejected() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("hi"));
        assert!(!is_valid_url("hello-world"));
        assert!(!is_valid_url("42"));
        assert!(!is_valid_url("DROP TABLE users;"));
    }

    #[test]
    fn test_single_slash_authority_is_rejected() {
        assert!(!is_valid_url("https:/hi.com"));
    }

    #[test]
    fn test_hostless_schemes_are_rejected() {
        assert!(!is_valid_url("mailto:test@example.com"));
        assert!(!is_valid_url("file:///home/user/document.txt"));
        assert!(!is_valid_url("data:text/plain,Hello"));
    }

    #[test]
    fn test_uppercase_scheme_is_accepted() {
        assert!(is_valid_url("HTTPS://EXAMPLE.COM/Path"));
    }

    #[test]
    fn test_non_http_scheme_with_host_is_accepted() {
        // The contract asks for scheme + host, not for http(s) specifically.
        assert!(is_valid_url("ftp://files.example.com/pub"));
    }
}
