use axum::{
    body::Body,
    http::{StatusCode, header::CONTENT_TYPE},
    response::Response,
};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    let status = response.status();

    assert_eq!(status, StatusCode::OK, "want status 200 OK, got {status}");
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, want: &str) {
    let got = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_else(|| panic!("want content type {want:?}, but the header is missing"));

    assert_eq!(got, want, "want content type {want:?}, got {got:?}");
}
