//! Request header helpers

use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Error when a required header is absent or unusable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("Missing required header: {0}")]
    Missing(String),

    #[error("Header {0} is not valid visible ASCII")]
    Invalid(String),
}

/// Read a header as a trimmed, non-empty string
///
/// Empty or whitespace-only values count as missing.
pub fn extract_header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Like [`extract_header`] but returns an error naming the header
pub fn require_header(headers: &HeaderMap, name: &str) -> Result<String, HeaderError> {
    extract_header(headers, name).ok_or_else(|| HeaderError::Missing(name.to_string()))
}

/// Build a `(name, value)` pair for a response header
pub fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), HeaderError> {
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| HeaderError::Invalid(name.to_string()))?;
    let header_value =
        HeaderValue::from_str(value).map_err(|_| HeaderError::Invalid(name.to_string()))?;
    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-access-token", HeaderValue::from_static("  abc.def.ghi "));
        headers.insert("x-refresh-token", HeaderValue::from_static("   "));

        // Lookup is case-insensitive
        assert_eq!(
            extract_header(&headers, "X-Access-Token").as_deref(),
            Some("abc.def.ghi")
        );
        assert_eq!(extract_header(&headers, "X-Refresh-Token"), None);
        assert_eq!(extract_header(&headers, "Authorization"), None);
    }

    #[test]
    fn test_require_header_names_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(
            require_header(&headers, "X-Access-Token"),
            Err(HeaderError::Missing("X-Access-Token".into()))
        );
    }

    #[test]
    fn test_header_pair() {
        let (name, value) = header_pair("X-Access-Token", "a.b.c").unwrap();
        assert_eq!(name.as_str(), "x-access-token");
        assert_eq!(value, "a.b.c");
        assert!(header_pair("X-Access-Token", "line\nbreak").is_err());
    }
}
