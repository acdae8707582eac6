use std::time::Duration;

use axum::{body::Body, extract::Request, response::Response};
use tracing::{Level, Span};

/// Root span of a request, tagged with a fresh request id.
pub(crate) fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = uuid::Uuid::new_v4();
    tracing::span!(
        Level::INFO,
        "[REQUEST]",
        method = tracing::field::display(request.method()),
        uri = tracing::field::display(request.uri().path()),
        version = tracing::field::debug(request.version()),
        request_id = tracing::field::display(request_id),
    )
}

pub(crate) fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::event!(Level::INFO, "[REQUEST START]");
}

/// Client rejections are warnings, only server faults are errors.
fn response_level(status_code: u16) -> Level {
    match status_code / 100 {
        5 => Level::ERROR,
        4 => Level::WARN,
        _ => Level::INFO,
    }
}

pub(crate) fn on_response(response: &Response, latency: Duration, _span: &Span) {
    let status_code = response.status().as_u16();

    // `event!` needs a constant level.
    let level = response_level(status_code);
    if level == Level::ERROR {
        tracing::event!(Level::ERROR, latency = ?latency, status = status_code, "[REQUEST END]");
    } else if level == Level::WARN {
        tracing::event!(Level::WARN, latency = ?latency, status = status_code, "[REQUEST END]");
    } else {
        tracing::event!(Level::INFO, latency = ?latency, status = status_code, "[REQUEST END]");
    }
}
