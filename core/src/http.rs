//! HTTP transport types for the host-does-IO pattern.
//!
//! The core builds an `HttpRequest` and parses an `HttpResponse`; whoever
//! holds the transport performs the round-trip in between. The upstream is
//! only ever asked for the full dataset with a plain GET, so there is no
//! method or body on the request side.

/// An outbound GET described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An upstream response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
