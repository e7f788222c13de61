//! Client Identifier Module
//!
//! Derives the rate-limit bucket for a request from proxy headers.

use axum::http::HeaderMap;

/// Header set by reverse proxies with the client chain, client first.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Header carrying the client address as seen by the proxy.
pub const REAL_IP_HEADER: &str = "x-real-ip";

/// Bucket shared by every request that carries neither header.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Returns the identifier used to rate-limit the sender of `headers`.
///
/// Takes the first entry of `x-forwarded-for`, trimmed, then `x-real-ip`,
/// then falls back to [`UNKNOWN_CLIENT`].
pub fn client_identifier(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
    };

    if let Some(forwarded) = header(FORWARDED_FOR_HEADER) {
        // `split` always yields at least one item.
        let first = forwarded.split(',').next().unwrap_or_default();
        return first.trim().to_string();
    }

    if let Some(real_ip) = header(REAL_IP_HEADER) {
        return real_ip.to_string();
    }

    UNKNOWN_CLIENT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_forwarded_for_first_hop() {
        let map = headers(&[("x-forwarded-for", " 203.0.113.7 , 10.0.0.1, 10.0.0.2")]);
        assert_eq!(client_identifier(&map), "203.0.113.7");
    }

    #[test]
    fn test_forwarded_for_wins_over_real_ip() {
        let map = headers(&[
            ("x-forwarded-for", "198.51.100.4"),
            ("x-real-ip", "10.0.0.9"),
        ]);
        assert_eq!(client_identifier(&map), "198.51.100.4");
    }

    #[test]
    fn test_real_ip_fallback() {
        let map = headers(&[("x-real-ip", "192.0.2.33")]);
        assert_eq!(client_identifier(&map), "192.0.2.33");
    }

    #[test]
    fn test_unknown_when_no_headers() {
        assert_eq!(client_identifier(&HeaderMap::new()), UNKNOWN_CLIENT);
    }

    #[test]
    fn test_empty_forwarded_for_falls_through() {
        let map = headers(&[("x-forwarded-for", ""), ("x-real-ip", "192.0.2.1")]);
        assert_eq!(client_identifier(&map), "192.0.2.1");
    }
}
