//! Domain-prefix normalization.

/// Normalizes a validated domain prefix for use in newly encoded short URLs.
///
/// Two rules apply, in order:
///
/// 1. a trailing `/` is appended when absent, so `prefix + code` always
///    yields a path-shaped short URL;
/// 2. the scheme component is replaced with `https`, whatever the original
///    scheme's length. Everything after the `://` separator is preserved.
///
/// Inputs are expected to have passed
/// [`crate::utils::url_validator::is_valid_url`] first; a string without a
/// `://` separator is returned with only the slash rule applied.
///
/// # Examples
///
/// ```
/// use shorty::utils::prefix_normalizer::normalize_prefix;
///
/// assert_eq!(normalize_prefix("http://shaw.ty"), "https://shaw.ty/");
/// assert_eq!(normalize_prefix("https://shaw.ty/"), "https://shaw.ty/");
/// assert_eq!(normalize_prefix("ftp://files.example"), "https://files.example/");
/// ```
pub fn normalize_prefix(input: &str) -> String {
    let with_slash = if input.ends_with('/') {
        input.to_string()
    } else {
        format!("{input}/")
    };

    match with_slash.find("://") {
        Some(sep) if &with_slash[..sep] != "https" => format!("https{}", &with_slash[sep..]),
        _ => with_slash,
    }
}
