//! Header access seams for request and response types.
//!
//! # Responsibilities
//! - Write a named header onto a response (overwriting)
//! - Read a named header from a request as text
//!
//! # Design Decisions
//! - Guard operations are generic over these traits, not over a concrete
//!   framework type
//! - Implemented for the `http` types re-exported by axum, so any
//!   hyper/tower/axum stack works without adapters
//! - Non-UTF-8 or opaque header values read as absent

use axum::http::{request, HeaderMap, HeaderName, HeaderValue, Request, Response};

/// Something a security header can be written to.
pub trait HeaderSink {
    /// Set `name` to `value`, replacing any existing value.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);
}

/// Something request headers can be read from.
pub trait HeaderSource {
    /// Returns the header value if present and representable as text.
    fn header_str(&self, name: &HeaderName) -> Option<&str>;
}

impl HeaderSink for HeaderMap {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.insert(name, value);
    }
}

impl<B> HeaderSink for Response<B> {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }
}

impl HeaderSource for HeaderMap {
    fn header_str(&self, name: &HeaderName) -> Option<&str> {
        self.get(name).and_then(|v| v.to_str().ok())
    }
}

impl<B> HeaderSource for Request<B> {
    fn header_str(&self, name: &HeaderName) -> Option<&str> {
        self.headers().header_str(name)
    }
}

impl HeaderSource for request::Parts {
    fn header_str(&self, name: &HeaderName) -> Option<&str> {
        self.headers.header_str(name)
    }
}
