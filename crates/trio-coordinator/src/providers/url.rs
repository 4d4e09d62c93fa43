//! Host and path extraction for host matching and deep-link rules.

use url::Url;

/// Parse `raw`, accepting only `http` and `https` URLs.
pub fn parse_http(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Lowercased host of an `http(s)` URL, without port or a leading `www.`.
/// IPv6 hosts keep their brackets.
pub fn host_of(raw: &str) -> Option<String> {
    let url = parse_http(raw)?;
    let host = url.host_str()?.to_ascii_lowercase();
    Some(match host.strip_prefix("www.") {
        Some(bare) => bare.to_string(),
        None => host,
    })
}

/// Path component of an `http(s)` URL. Query and fragment are dropped;
/// anything unparseable maps to `/`.
pub fn path_of(raw: &str) -> String {
    parse_http(raw)
        .map(|url| url.path().to_string())
        .unwrap_or_else(|| "/".to_string())
}
