//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::internal_server_error::InternalServerError;

/// The number of bytes of a request or response body that are logged at the
/// `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let Ok(body_bytes) = read_body(body).await else {
        return InternalServerError::default().into_response();
    };
    log_request(&parts, &String::from_utf8_lossy(&body_bytes));

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let Ok(body_bytes) = read_body(body).await else {
        return InternalServerError::default().into_response();
    };
    log_response(&parts, &String::from_utf8_lossy(&body_bytes));

    Response::from_parts(parts, Body::from(body_bytes))
}

/// Buffer the whole body. Only the logged copy is decoded as text.
async fn read_body(body: Body) -> Result<Bytes, axum::Error> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("Could not read body: {error}"))
}

/// The longest prefix of `body` that fits in [LOG_BODY_LENGTH_LIMIT] bytes
/// without splitting a character.
fn truncate_body(body: &str) -> &str {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return body;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(parts: &request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {parts:#?}\nbody: {:}...",
            truncate_body(body)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {parts:#?}\nbody: {body:?}");
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {parts:#?}\nbody: {:}...",
            truncate_body(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {parts:#?}\nbody: {body:?}");
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Bytes,
        middleware,
        routing::{get, post},
    };
    use axum_test::TestServer;

    use super::{LOG_BODY_LENGTH_LIMIT, logging_middleware, truncate_body};

    #[test]
    fn short_body_is_not_truncated() {
        assert_eq!(truncate_body("persona=priya"), "persona=priya");
    }

    #[test]
    fn long_body_is_truncated_on_char_boundary() {
        let body = "₹".repeat(LOG_BODY_LENGTH_LIMIT);

        let got = truncate_body(&body);

        assert!(got.len() <= LOG_BODY_LENGTH_LIMIT);
        assert!(got.chars().all(|c| c == '₹'));
        assert_eq!(got.len(), LOG_BODY_LENGTH_LIMIT / 3 * 3);
    }

    #[tokio::test]
    async fn middleware_passes_body_through() {
        let body = "x".repeat(LOG_BODY_LENGTH_LIMIT * 2);
        let expected = body.clone();
        let app = Router::new()
            .route("/", get(move || async move { body }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app).expect("Could not create test server");

        let response = server.get("/").await;

        response.assert_status_ok();
        response.assert_text(expected);
    }

    #[tokio::test]
    async fn middleware_keeps_binary_bodies_intact() {
        let body = vec![0xff, 0xfe, 0x00, b'o', b'k', 0x80];
        let expected = body.clone();
        let app = Router::new()
            .route("/", post(|bytes: Bytes| async move { bytes }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app).expect("Could not create test server");

        let response = server.post("/").bytes(Bytes::from(body)).await;

        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), expected.as_slice());
    }
}
