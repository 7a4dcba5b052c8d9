//! HTTP request/response tracing middleware.

use axum::{body::Body, extract::MatchedPath, http::Request};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// The concrete layer returned by [`layer`].
pub type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&Request<Body>) -> Span,
    DefaultOnRequest,
    DefaultOnResponse,
>;

/// Creates the request tracing layer.
///
/// Each request gets an `INFO` span named `http` carrying the method, the
/// concrete path and, once routing has run, the matched route template
/// (`/s/{code}`), so redirects for different codes can be grouped. Query
/// strings are left out of the span.
///
/// Responses are logged at `INFO` with status and latency in milliseconds;
/// 5xx responses are additionally reported at `ERROR`.
///
/// ```text
/// INFO http{method=GET path=/s/aB3xY9 route=/s/{code}}: finished processing request latency=1 ms status=302
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request<Body>) -> Span)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}

fn make_span(request: &Request<Body>) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or("-");

    tracing::info_span!(
        "http",
        method = %request.method(),
        path = %request.uri().path(),
        route,
    )
}
