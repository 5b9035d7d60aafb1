use crate::error::{CoreError, Result};
use url::Url;

const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Normalizes and validates an address before it is accepted into the store.
///
/// An address without a scheme is treated as `http`. The result always ends
/// with a trailing `/`, e.g. `example.com` becomes `http://example.com/`.
///
/// The address is rejected when it does not parse as an absolute URL, has an
/// empty host, contains no `.` at all, or has a host that starts or ends
/// with `.`.
pub fn validate_url(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::InvalidUrl("url cannot be empty".to_string()));
    }

    let candidate = if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{raw}")
    };

    let parsed = Url::parse(&candidate)
        .map_err(|e| CoreError::InvalidUrl(format!("'{candidate}': {e}")))?;

    let host = parsed.host_str().unwrap_or_default();
    if host.is_empty() {
        return Err(CoreError::InvalidUrl(format!("'{candidate}' has no host")));
    }
    if !candidate.contains('.') {
        return Err(CoreError::InvalidUrl(format!(
            "'{candidate}' does not contain a '.'"
        )));
    }
    if host.starts_with('.') || host.ends_with('.') {
        return Err(CoreError::InvalidUrl(format!(
            "host '{host}' cannot start or end with '.'"
        )));
    }

    Ok(format!("{candidate}/"))
}

/// Reports whether `raw` starts with an RFC 3986 scheme followed by `:`.
fn has_scheme(raw: &str) -> bool {
    for (i, c) in raw.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {}
            '0'..='9' | '+' | '-' | '.' if i > 0 => {}
            ':' => return i > 0,
            _ => return false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(raw: &str) {
        let err = validate_url(raw).unwrap_err();
        assert!(matches!(err, CoreError::InvalidUrl(_)), "{raw}: {err:?}");
    }

    #[test]
    fn bare_domain_gets_scheme_and_slash() {
        assert_eq!(validate_url("example.com").unwrap(), "http://example.com/");
    }

    #[test]
    fn existing_scheme_is_kept() {
        assert_eq!(
            validate_url("https://example.com").unwrap(),
            "https://example.com/"
        );
        assert_eq!(
            validate_url("https://example.com/docs/page").unwrap(),
            "https://example.com/docs/page/"
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(validate_url("  a.com\n").unwrap(), "http://a.com/");
    }

    #[test]
    fn missing_host_is_rejected() {
        assert_invalid("http://");
        assert_invalid("");
        assert_invalid("   ");
    }

    #[test]
    fn host_dots_are_checked() {
        assert_invalid("nohost.");
        assert_invalid(".startsdot.com");
        assert_invalid("http://example.com./");
    }

    #[test]
    fn address_without_dot_is_rejected() {
        assert_invalid("localhost");
        assert_invalid("http://intranet/");
    }

    #[test]
    fn scheme_detection() {
        assert!(has_scheme("http://a.com"));
        assert!(has_scheme("git+ssh://a.com"));
        assert!(!has_scheme("a.com"));
        assert!(!has_scheme("1http://a.com"));
        assert!(!has_scheme(":a.com"));
        assert!(!has_scheme("a.com/x:y"));
    }
}
