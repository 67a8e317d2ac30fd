//! URL helpers for same-origin image handling.

use super::constants::ACCESS_TOKEN_PARAM;

/// Whether an image `src` points at the configured Canvas instance.
///
/// This is a plain prefix test against the normalized base URL, matching how
/// Canvas embeds its own file links (always absolute, same scheme and host).
#[must_use]
pub fn is_same_origin(src: &str, base_url: &str) -> bool {
    !base_url.is_empty() && src.starts_with(base_url)
}

/// Append `access_token={token}` to a URL, joining with `&` when the URL
/// already carries a query string and `?` otherwise.
///
/// The token is appended verbatim; Canvas tokens are URL-safe.
///
/// ```
/// # use canvas_assignment_md::utils::append_access_token;
/// assert_eq!(
///     append_access_token("https://c.example/files/1?v=2", "tok"),
///     "https://c.example/files/1?v=2&access_token=tok"
/// );
/// ```
#[must_use]
pub fn append_access_token(src: &str, token: &str) -> String {
    let separator = if src.contains('?') { '&' } else { '?' };
    format!("{src}{separator}{ACCESS_TOKEN_PARAM}={token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://canvas.example.edu";

    #[test]
    fn test_append_without_query() {
        assert_eq!(
            append_access_token(&format!("{BASE}/files/1"), "TOKEN"),
            format!("{BASE}/files/1?access_token=TOKEN")
        );
    }

    #[test]
    fn test_append_with_existing_query() {
        assert_eq!(
            append_access_token(&format!("{BASE}/files/1?v=2"), "TOKEN"),
            format!("{BASE}/files/1?v=2&access_token=TOKEN")
        );
    }

    #[test]
    fn test_same_origin_prefix() {
        assert!(is_same_origin(&format!("{BASE}/files/1/preview"), BASE));
        assert!(!is_same_origin("https://cdn.example.com/a.png", BASE));
        assert!(!is_same_origin("/files/1", BASE));
    }

    #[test]
    fn test_empty_base_never_matches() {
        assert!(!is_same_origin("https://anything", ""));
    }
}
