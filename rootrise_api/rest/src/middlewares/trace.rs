use std::time::Duration;

use axum::{
    extract::{MatchedPath, Request},
    response::Response,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn, Span};

use super::request_id::RequestId;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(make_span)
            .on_request(())
            .on_response(on_response)
            .on_body_chunk(())
            .on_eos(())
            .on_failure(()),
    )
}

/// Requests that no route matched are answered from the client bundle.
fn handler(request: &Request) -> &str {
    request
        .extensions()
        .get::<MatchedPath>()
        .map_or("bundle", MatchedPath::as_str)
}

fn make_span(request: &Request) -> Span {
    let method = request.method();
    // The query string may carry visitor input, so only the path is logged.
    let path = request.uri().path();
    let handler = handler(request);
    let request_id = RequestId::from_extensions(request.extensions())
        .map(|id| id.to_string())
        .unwrap_or_default();

    tracing::debug_span!("http-request", %method, path, handler, %request_id)
}

fn on_response(response: &Response, latency: Duration, _span: &Span) {
    let status = response.status();
    if status.is_server_error() {
        warn!(?latency, %status, "request failed");
    } else {
        debug!(?latency, %status, "request finished");
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http};

    use super::*;

    #[test]
    fn unmatched_requests_are_served_by_bundle() {
        let request = http::Request::new(Body::empty());
        assert_eq!(handler(&request), "bundle");
    }
}
