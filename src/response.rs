use reqwest::{Method, StatusCode, Url};

/// Identity of the request that produced a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestInfo {
    pub method: Method,
    pub url: Option<Url>,
}

impl RequestInfo {
    /// Creates request info without a URL.
    pub fn new(method: Method) -> Self {
        Self { method, url: None }
    }

    /// Attaches the request URL.
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }
}

/// A received response, split into the pieces needed to describe it.
///
/// `B` is the body reader; `None` means the response carried no body.
#[derive(Debug)]
pub struct ResponseParts<B> {
    pub status: String,
    pub status_code: StatusCode,
    pub body: Option<B>,
    pub request: RequestInfo,
}

impl<B> ResponseParts<B> {
    /// Creates parts with a status line derived from the canonical reason.
    pub fn new(status_code: StatusCode, request: RequestInfo) -> Self {
        Self {
            status: status_line(status_code),
            status_code,
            body: None,
            request,
        }
    }

    /// Replaces the derived status line with the one the server sent.
    pub fn with_status_line(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Attaches a body reader.
    pub fn with_body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }
}

/// Formats a status code the way an HTTP/1.1 status line does.
///
/// Example: `404` → `"404 Not Found"`. Codes without a canonical reason
/// render as the bare number.
pub fn status_line(status_code: StatusCode) -> String {
    match status_code.canonical_reason() {
        Some(reason) => format!("{} {reason}", status_code.as_str()),
        None => status_code.as_str().to_owned(),
    }
}
