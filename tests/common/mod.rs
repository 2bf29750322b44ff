//! Shared utilities for integration testing.

use axum::{
    body::{to_bytes, Body},
    http::{header::USER_AGENT, Request, Response},
    Router,
};
use tower::ServiceExt;

pub const CHROME_UA: &str = "Mozilla/5.0 (Linux; Android 4.0.4; Galaxy Nexus Build/IMM76B) AppleWebKit/535.19 (KHTML, like Gecko) Chrome/18.0.1025.133 Mobile Safari/535.19";
pub const IE7_UA: &str = "Mozilla/4.0 (compatible; MSIE 7.0b; Windows NT 6.0";

/// Send a GET / through `app`, optionally with a user agent.
pub async fn get(app: Router, user_agent: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri("/");
    if let Some(ua) = user_agent {
        builder = builder.header(USER_AGENT, ua);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as text.
#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Header value as text, if present.
pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}
