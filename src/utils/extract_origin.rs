//! Public origin extraction from HTTP request headers.

use crate::AppError;
use crate::domain::entities::OriginInfo;
use axum::http::{HeaderMap, HeaderName, header};

const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");
const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");

/// Scheme assumed when the proxy does not report one.
const DEFAULT_SCHEME: &str = "https";

/// Extracts the public scheme and host from HTTP request headers.
///
/// - Scheme: `X-Forwarded-Proto`, defaulting to `https`
/// - Host: `X-Forwarded-Host`, falling back to `Host`
///
/// For comma-separated forwarded values only the first (client-facing) entry
/// is used. Ports are preserved.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - Neither `X-Forwarded-Host` nor `Host` is present
/// - The host header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "calc.example.com".parse().unwrap());
///
/// let origin = extract_origin_from_headers(&headers).unwrap();
/// assert_eq!(origin.base_url(), "https://calc.example.com");
/// ```
pub fn extract_origin_from_headers(headers: &HeaderMap) -> Result<OriginInfo, AppError> {
    let scheme = headers
        .get(&X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(first_forwarded)
        .unwrap_or(DEFAULT_SCHEME);

    let host_header = headers
        .get(&X_FORWARDED_HOST)
        .or_else(|| headers.get(header::HOST))
        .ok_or_else(|| AppError::bad_request("Missing Host header"))?;

    let host = host_header
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header"))?;

    let host = first_forwarded(host).ok_or_else(|| AppError::bad_request("Missing Host header"))?;

    Ok(OriginInfo::new(scheme, host))
}

fn first_forwarded(value: &str) -> Option<&str> {
    value
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
